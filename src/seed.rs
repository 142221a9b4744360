/// A built-in routine: (exercise, estimated reps or seconds, sets).
pub struct CatalogueEntry {
    pub name: &'static str,
    pub category: &'static str,
    pub equipment_type: &'static str,
    pub items: &'static [(&'static str, u16, u16)],
}

pub const CATALOGUE: &[CatalogueEntry] = &[
    CatalogueEntry {
        name: "Upper Body (Bodyweight)",
        category: "upper",
        equipment_type: "bodyweight",
        items: &[
            ("Push-ups", 12, 3),
            ("Pike Push-ups", 8, 3),
            ("Tricep Dips", 10, 3),
            ("Superman", 15, 3),
            ("Plank Up-Downs", 12, 3),
            ("Arm Circles", 20, 2),
        ],
    },
    CatalogueEntry {
        name: "Upper Body (Gym)",
        category: "upper",
        equipment_type: "equipment",
        items: &[
            ("Barbell Rows", 8, 4),
            ("Overhead Press", 10, 3),
            ("Lat Pulldowns", 12, 3),
            ("Dumbbell Bench Press", 10, 3),
            ("Cable Face Pulls", 15, 3),
            ("Dumbbell Shrugs", 12, 3),
        ],
    },
    CatalogueEntry {
        name: "Lower Body (Bodyweight)",
        category: "lower",
        equipment_type: "bodyweight",
        items: &[
            ("Bodyweight Squats", 20, 4),
            ("Lunges (each leg)", 12, 3),
            ("Single-Leg Glute Bridges", 15, 3),
            ("Wall Sit", 45, 3),
            ("Calf Raises", 20, 3),
            ("Jump Squats", 10, 3),
        ],
    },
    CatalogueEntry {
        name: "Lower Body (Gym)",
        category: "lower",
        equipment_type: "equipment",
        items: &[
            ("Barbell Squats", 8, 4),
            ("Romanian Deadlifts", 10, 4),
            ("Bulgarian Split Squats", 12, 3),
            ("Hip Thrusts", 12, 3),
            ("Leg Press", 15, 3),
            ("Standing Calf Raises", 15, 3),
        ],
    },
    CatalogueEntry {
        name: "Push (Bodyweight)",
        category: "push",
        equipment_type: "bodyweight",
        items: &[
            ("Push-ups", 15, 4),
            ("Pike Push-ups", 10, 3),
            ("Diamond Push-ups", 8, 3),
            ("Tricep Dips", 12, 3),
            ("Decline Push-ups", 10, 3),
            ("Handstand Hold/Wall Walk", 30, 3),
        ],
    },
    CatalogueEntry {
        name: "Push (Gym)",
        category: "push",
        equipment_type: "equipment",
        items: &[
            ("Barbell Bench Press", 8, 4),
            ("Overhead Press", 10, 4),
            ("Incline Dumbbell Press", 10, 3),
            ("Dips", 12, 3),
            ("Lateral Raises", 15, 3),
            ("Close-Grip Bench Press", 10, 3),
        ],
    },
    CatalogueEntry {
        name: "Pull (Bodyweight)",
        category: "pull",
        equipment_type: "bodyweight",
        items: &[
            ("Pull-ups/Chin-ups", 6, 4),
            ("Inverted Rows", 10, 3),
            ("Superman", 15, 3),
            ("Reverse Fly (lying)", 12, 3),
            ("Face Pull (towel)", 15, 3),
            ("Dead Hang", 30, 3),
        ],
    },
    CatalogueEntry {
        name: "Pull (Gym)",
        category: "pull",
        equipment_type: "equipment",
        items: &[
            ("Deadlifts", 6, 4),
            ("Pull-ups/Lat Pulldowns", 8, 4),
            ("Barbell Rows", 10, 3),
            ("Cable Face Pulls", 15, 3),
            ("Hammer Curls", 12, 3),
            ("Shrugs", 12, 3),
        ],
    },
    CatalogueEntry {
        name: "Legs (Bodyweight)",
        category: "legs",
        equipment_type: "bodyweight",
        items: &[
            ("Squats", 25, 4),
            ("Jump Squats", 15, 3),
            ("Reverse Lunges", 15, 3),
            ("Single-Leg Deadlifts", 10, 3),
            ("Lateral Lunges", 12, 3),
            ("Glute Bridges", 20, 3),
        ],
    },
    CatalogueEntry {
        name: "Legs (Gym)",
        category: "legs",
        equipment_type: "equipment",
        items: &[
            ("Back Squats", 8, 4),
            ("Romanian Deadlifts", 10, 4),
            ("Leg Press", 12, 3),
            ("Walking Lunges", 12, 3),
            ("Leg Curls", 12, 3),
            ("Calf Raises", 15, 4),
        ],
    },
    CatalogueEntry {
        name: "Chest (Bodyweight)",
        category: "chest",
        equipment_type: "bodyweight",
        items: &[
            ("Standard Push-ups", 15, 4),
            ("Wide Push-ups", 12, 3),
            ("Decline Push-ups", 10, 3),
            ("Diamond Push-ups", 8, 3),
            ("Archer Push-ups", 6, 3),
            ("Chest Dips", 10, 3),
        ],
    },
    CatalogueEntry {
        name: "Chest (Gym)",
        category: "chest",
        equipment_type: "equipment",
        items: &[
            ("Barbell Bench Press", 8, 4),
            ("Incline Dumbbell Press", 10, 4),
            ("Decline Barbell Press", 10, 3),
            ("Cable Flyes", 12, 3),
            ("Dips", 12, 3),
            ("Pec Deck Machine", 15, 3),
        ],
    },
    CatalogueEntry {
        name: "Arms (Bodyweight)",
        category: "arms",
        equipment_type: "bodyweight",
        items: &[
            ("Diamond Push-ups", 10, 3),
            ("Tricep Dips", 12, 4),
            ("Chin-ups", 6, 3),
            ("Pike Push-ups", 8, 3),
            ("Plank to Push-up", 10, 3),
            ("Reverse Plank", 30, 3),
        ],
    },
    CatalogueEntry {
        name: "Arms (Gym)",
        category: "arms",
        equipment_type: "equipment",
        items: &[
            ("Barbell Curls", 10, 4),
            ("Close-Grip Bench Press", 10, 4),
            ("Hammer Curls", 12, 3),
            ("Overhead Tricep Extension", 12, 3),
            ("Cable Curls", 15, 3),
            ("Cable Tricep Pushdowns", 15, 3),
        ],
    },
    CatalogueEntry {
        name: "Biceps (Gym)",
        category: "biceps",
        equipment_type: "equipment",
        items: &[
            ("Barbell Curls", 10, 4),
            ("Hammer Curls", 12, 4),
            ("Preacher Curls", 10, 3),
            ("Cable Hammer Curls", 12, 3),
            ("Concentration Curls", 12, 3),
            ("21s (Barbell Curls)", 21, 2),
        ],
    },
    CatalogueEntry {
        name: "Triceps (Gym)",
        category: "triceps",
        equipment_type: "equipment",
        items: &[
            ("Close-Grip Bench Press", 8, 4),
            ("Overhead Tricep Extension", 12, 4),
            ("Cable Tricep Pushdowns", 15, 3),
            ("Dips", 12, 3),
            ("Skull Crushers", 10, 3),
            ("Diamond Push-ups", 12, 3),
        ],
    },
    CatalogueEntry {
        name: "Abs & Core (Bodyweight)",
        category: "abs",
        equipment_type: "bodyweight",
        items: &[
            ("Plank", 60, 3),
            ("Bicycle Crunches", 20, 3),
            ("Russian Twists", 30, 3),
            ("Mountain Climbers", 20, 3),
            ("Leg Raises", 15, 3),
            ("Dead Bug", 12, 3),
        ],
    },
    CatalogueEntry {
        name: "Abs & Core (Gym)",
        category: "abs",
        equipment_type: "equipment",
        items: &[
            ("Cable Crunches", 15, 4),
            ("Hanging Leg Raises", 10, 4),
            ("Ab Wheel Rollouts", 12, 3),
            ("Russian Twists (weighted)", 20, 3),
            ("Plank (weighted)", 45, 3),
            ("Cable Side Bends", 15, 3),
        ],
    },
    CatalogueEntry {
        name: "Back (Gym)",
        category: "back",
        equipment_type: "equipment",
        items: &[
            ("Deadlifts", 6, 4),
            ("Pull-ups/Lat Pulldowns", 8, 4),
            ("Barbell Rows", 10, 4),
            ("T-Bar Rows", 12, 3),
            ("Cable Rows", 12, 3),
            ("Reverse Flyes", 15, 3),
        ],
    },
    CatalogueEntry {
        name: "Shoulders (Gym)",
        category: "shoulders",
        equipment_type: "equipment",
        items: &[
            ("Overhead Press", 8, 4),
            ("Lateral Raises", 15, 4),
            ("Front Raises", 12, 3),
            ("Rear Delt Flyes", 15, 3),
            ("Arnold Press", 10, 3),
            ("Face Pulls", 20, 3),
        ],
    },
    CatalogueEntry {
        name: "HIIT Cardio (Bodyweight)",
        category: "cardio",
        equipment_type: "bodyweight",
        items: &[
            ("Burpees", 10, 4),
            ("Mountain Climbers", 30, 4),
            ("Jump Squats", 15, 4),
            ("High Knees", 30, 4),
            ("Jumping Jacks", 25, 4),
            ("Plank Jacks", 20, 3),
        ],
    },
    CatalogueEntry {
        name: "Functional Movement",
        category: "functional",
        equipment_type: "bodyweight",
        items: &[
            ("Turkish Get-ups", 5, 3),
            ("Bear Crawl", 30, 3),
            ("Farmer's Walk", 60, 3),
            ("Single-Leg RDL", 10, 3),
            ("Crab Walk", 20, 3),
            ("Bird Dog", 12, 3),
        ],
    },
];
