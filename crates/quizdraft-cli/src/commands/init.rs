//! The `quizdraft init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizdraft.toml
    if std::path::Path::new("quizdraft.toml").exists() {
        println!("quizdraft.toml already exists, skipping.");
    } else {
        std::fs::write("quizdraft.toml", SAMPLE_CONFIG)?;
        println!("Created quizdraft.toml");
    }

    // Create example quiz
    std::fs::create_dir_all("quizzes")?;
    let example_path = std::path::Path::new("quizzes/example.json");
    if example_path.exists() {
        println!("quizzes/example.json already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUIZ)?;
        println!("Created quizzes/example.json");
    }

    println!("\nNext steps:");
    println!("  1. Edit quizdraft.toml with your owner id and name");
    println!("  2. Run: quizdraft check --quiz quizzes/example.json");
    println!("  3. Run: quizdraft submit --quiz quizzes/example.json");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizdraft configuration

default_option_count = 4
min_options = 2
max_options = 5
enforce_option_limits = false

[owner]
id = "teacher-1"
name = "Teacher"
"#;

const EXAMPLE_QUIZ: &str = r#"{
  "id": "example-quiz",
  "owner": { "id": "teacher-1", "name": "Teacher" },
  "name": "Example Quiz",
  "items": [
    {
      "uuid": "example-item-1",
      "question": "Which planet is closest to the sun?",
      "type": "choice",
      "options": [
        { "uuid": "example-option-1", "title": "Mercury", "isAnswer": true },
        { "uuid": "example-option-2", "title": "Venus", "isAnswer": false },
        { "uuid": "example-option-3", "title": "Earth", "isAnswer": false },
        { "uuid": "example-option-4", "title": "Mars", "isAnswer": false }
      ],
      "reason": "Mercury orbits at about 0.39 AU."
    },
    {
      "uuid": "example-item-2",
      "question": "Why do we have seasons?",
      "type": "essay",
      "essayAnswer": "Earth's axis is tilted relative to its orbit."
    }
  ]
}
"#;
