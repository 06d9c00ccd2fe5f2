// Test fixtures - reusable test data
// Provides consistent test data across all test files

use plan_binder::models::page::DayPage;
use plan_binder::models::plan::Plan;

/// Pages titled "Day 1" through "Day {count}"
pub fn numbered_pages(count: usize) -> Vec<DayPage> {
    (1..=count)
        .map(|n| DayPage::new(format!("Day {n}")).unwrap())
        .collect()
}

/// A plan with `count` numbered pages
pub fn sample_plan(count: usize) -> Plan {
    Plan::new("Test Plan", numbered_pages(count)).unwrap()
}

/// An eight-day plan document as it would sit on disk
pub const SAMPLE_PLAN_TOML: &str = r#"
title = "February Training Block"

[[pages]]
title = "Day 1 - Squat"
date = "2026-02-02"
entries = ["Back Squat 5x5", "Leg Press 3x10"]

[[pages]]
title = "Day 2 - Bench"
date = "2026-02-03"
entries = ["Bench Press 5x5", "Dips 3x12"]

[[pages]]
title = "Day 3 - Rest"
date = "2026-02-04"

[[pages]]
title = "Day 4 - Deadlift"
date = "2026-02-05"
entries = ["Deadlift 5x3"]

[[pages]]
title = "Day 5 - Press"
date = "2026-02-06"
entries = ["Overhead Press 5x5", "Chin-ups 3x8"]

[[pages]]
title = "Day 6 - Conditioning"
date = "2026-02-07"
entries = ["Sled Push 6x20m"]

[[pages]]
title = "Day 7 - Rest"
date = "2026-02-08"

[[pages]]
title = "Day 8 - Squat"
date = "2026-02-09"
entries = ["Back Squat 3x3"]
"#;
