//! The `scorecalc init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("scorecalc.toml").exists() {
        println!("scorecalc.toml already exists, skipping.");
    } else {
        std::fs::write("scorecalc.toml", SAMPLE_CONFIG)?;
        println!("Created scorecalc.toml");
    }

    std::fs::create_dir_all("score-sheets")?;
    let example_path = std::path::Path::new("score-sheets/example.toml");
    if example_path.exists() {
        println!("score-sheets/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_SHEET)?;
        println!("Created score-sheets/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Record your practice tests in score-sheets/example.toml");
    println!("  2. Run: scorecalc validate --sheet score-sheets/example.toml");
    println!("  3. Run: scorecalc run --sheet score-sheets/example.toml --format all");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# scorecalc configuration

default_act_variant = "enhanced"
default_sat_variant = "digital"
output_dir = "./scorecalc-results"
decline_threshold = 0
"#;

const EXAMPLE_SHEET: &str = r#"[sheet]
id = "example"
name = "Example Practice Log"
description = "One attempt of each test variant"

[[attempts]]
id = "act-enhanced-1"
name = "Enhanced ACT practice 1"
test = "act"
variant = "enhanced"
tags = ["act"]

[attempts.raw]
english = 25
math = 23
reading = 18
science = 20

[[attempts]]
id = "act-legacy-1"
name = "Legacy ACT practice 1"
test = "act"
variant = "legacy"
tags = ["act"]

[attempts.raw]
english = 38
math = 30
reading = 20
science = 20

[[attempts]]
id = "sat-digital-1"
name = "Digital SAT practice 1"
test = "sat"
variant = "digital"
tags = ["sat"]

[attempts.raw]
rw1 = 14
rw2 = 14
math1 = 11
math2 = 11

[[attempts]]
id = "sat-legacy-1"
name = "Legacy SAT practice 1"
test = "sat"
variant = "legacy"
tags = ["sat"]

[attempts.raw]
reading = 26
writing = 22
math_no_calc = 10
math_calc = 19
"#;
