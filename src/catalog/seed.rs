// ABOUTME: Preloaded exercise list installed on first launch
// ABOUTME: Common barbell, dumbbell, machine, and bodyweight lifts across every muscle group
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use barbell_core::models::MuscleGroup;

/// Name and muscle group of every preloaded exercise
pub const SEED_EXERCISES: &[(&str, MuscleGroup)] = &[
    // Chest
    ("Bench Press", MuscleGroup::Chest),
    ("Incline Bench Press", MuscleGroup::Chest),
    ("Decline Bench Press", MuscleGroup::Chest),
    ("Dumbbell Bench Press", MuscleGroup::Chest),
    ("Incline Dumbbell Press", MuscleGroup::Chest),
    ("Dumbbell Fly", MuscleGroup::Chest),
    ("Cable Crossover", MuscleGroup::Chest),
    ("Chest Dip", MuscleGroup::Chest),
    ("Push-Up", MuscleGroup::Chest),
    // Back
    ("Deadlift", MuscleGroup::Back),
    ("Barbell Row", MuscleGroup::Back),
    ("Dumbbell Row", MuscleGroup::Back),
    ("Pull-Up", MuscleGroup::Back),
    ("Chin-Up", MuscleGroup::Back),
    ("Lat Pulldown", MuscleGroup::Back),
    ("Seated Cable Row", MuscleGroup::Back),
    ("T-Bar Row", MuscleGroup::Back),
    // Shoulders
    ("Overhead Press", MuscleGroup::Shoulders),
    ("Dumbbell Shoulder Press", MuscleGroup::Shoulders),
    ("Arnold Press", MuscleGroup::Shoulders),
    ("Lateral Raise", MuscleGroup::Shoulders),
    ("Front Raise", MuscleGroup::Shoulders),
    ("Face Pull", MuscleGroup::Shoulders),
    ("Shrug", MuscleGroup::Shoulders),
    // Biceps
    ("Barbell Curl", MuscleGroup::Biceps),
    ("Dumbbell Curl", MuscleGroup::Biceps),
    ("Hammer Curl", MuscleGroup::Biceps),
    ("Preacher Curl", MuscleGroup::Biceps),
    ("Cable Curl", MuscleGroup::Biceps),
    // Triceps
    ("Close-Grip Bench Press", MuscleGroup::Triceps),
    ("Skull Crusher", MuscleGroup::Triceps),
    ("Tricep Pushdown", MuscleGroup::Triceps),
    ("Overhead Tricep Extension", MuscleGroup::Triceps),
    ("Tricep Dip", MuscleGroup::Triceps),
    // Legs
    ("Squat", MuscleGroup::Legs),
    ("Front Squat", MuscleGroup::Legs),
    ("Leg Press", MuscleGroup::Legs),
    ("Romanian Deadlift", MuscleGroup::Legs),
    ("Lunge", MuscleGroup::Legs),
    ("Bulgarian Split Squat", MuscleGroup::Legs),
    ("Leg Extension", MuscleGroup::Legs),
    ("Leg Curl", MuscleGroup::Legs),
    ("Calf Raise", MuscleGroup::Legs),
    // Glutes
    ("Hip Thrust", MuscleGroup::Glutes),
    ("Glute Bridge", MuscleGroup::Glutes),
    ("Cable Kickback", MuscleGroup::Glutes),
    // Core
    ("Plank", MuscleGroup::Core),
    ("Hanging Leg Raise", MuscleGroup::Core),
    ("Cable Crunch", MuscleGroup::Core),
    ("Ab Wheel Rollout", MuscleGroup::Core),
    ("Russian Twist", MuscleGroup::Core),
    // Full body
    ("Power Clean", MuscleGroup::FullBody),
    ("Clean and Jerk", MuscleGroup::FullBody),
    ("Snatch", MuscleGroup::FullBody),
    ("Kettlebell Swing", MuscleGroup::FullBody),
    ("Thruster", MuscleGroup::FullBody),
    // Cardio
    ("Rowing Machine", MuscleGroup::Cardio),
    ("Jump Rope", MuscleGroup::Cardio),
    ("Burpee", MuscleGroup::Cardio),
    // Other
    ("Farmer's Walk", MuscleGroup::Other),
];
