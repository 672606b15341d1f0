//! The user profile collected by the interactive section.

use std::io::Write;

use typetour_types::{AnswerError, Answers, Field, Interview};

/// Answers collected from the interactive section.
///
/// Fully formed only after all four fields validate; not mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    /// User's name, non-empty after trimming.
    pub name: String,

    /// Age in years, within [0, 150].
    pub age: i64,

    /// Any finite decimal number.
    pub favorite_number: f64,

    /// Whether the user likes Rust.
    pub likes_rust: bool,
}

impl UserProfile {
    /// The interview that collects a profile: four fields, each with its own
    /// validation rule and retry loop.
    pub fn interview() -> Interview {
        Interview::new(vec![
            Field::text("name", "Please enter your name:"),
            Field::int_in("age", "Please enter your age:", 0, 150),
            Field::float(
                "favorite_number",
                "Please enter your favorite number (can be decimal):",
            ),
            Field::confirm("likes_rust", "Do you like Rust programming? (yes/no or y/n):"),
        ])
        .with_prelude("🎯 INTERACTIVE SECTION:\n-----------------------")
        .with_epilogue("\n✅ INPUT PROCESSING COMPLETE!\n==============================")
    }

    /// Reconstruct a profile from collected answers.
    pub fn from_answers(answers: &Answers) -> Result<Self, AnswerError> {
        Ok(Self {
            name: answers.get_text("name")?.to_string(),
            age: answers.get_int("age")?,
            favorite_number: answers.get_float("favorite_number")?,
            likes_rust: answers.get_bool("likes_rust")?,
        })
    }

    /// Age expressed in months.
    pub fn age_in_months(&self) -> i64 {
        self.age * 12
    }

    /// Whether the age is 18 or above.
    pub fn is_adult(&self) -> bool {
        self.age >= 18
    }

    /// The favorite number squared.
    pub fn favorite_number_squared(&self) -> f64 {
        self.favorite_number * self.favorite_number
    }

    /// Print the fixed-format summary block.
    pub fn print_summary(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writeln!(writer, "Hello, {}! 👋", self.name)?;
        writeln!(
            writer,
            "You are {} years old, which is {} months!",
            self.age,
            self.age_in_months()
        )?;
        writeln!(writer, "Adult status: {}", self.is_adult())?;
        writeln!(
            writer,
            "Your favorite number {:.2} squared is {:.4}",
            self.favorite_number,
            self.favorite_number_squared()
        )?;
        if self.likes_rust {
            writeln!(writer, "Great! Rust is an awesome programming language! 🎉")?;
        } else {
            writeln!(writer, "That's okay, maybe you'll grow to like Rust! 😊")?;
        }

        writeln!(writer)?;
        writeln!(writer, "🔄 TYPE CONVERSION EXAMPLES:")?;
        writeln!(writer, "----------------------------")?;
        let age_as_float = self.age as f64;
        let favorite_as_int = self.favorite_number as i64;
        writeln!(writer, "Your age as f64: {age_as_float:.2}")?;
        writeln!(writer, "Your favorite number as i64: {favorite_as_int}")?;
        writeln!(
            writer,
            "Age + Favorite Number: {:.2}",
            age_as_float + self.favorite_number
        )?;

        writeln!(writer)?;
        writeln!(writer, "========================================")?;
        writeln!(writer, "   PROGRAM COMPLETED SUCCESSFULLY!")?;
        writeln!(writer, "   Thank you for exploring Rust data types!")?;
        writeln!(writer, "========================================")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typetour_types::{PromptBackend, ScriptedBackend};

    fn profile() -> UserProfile {
        UserProfile {
            name: "Alice".to_string(),
            age: 30,
            favorite_number: 3.5,
            likes_rust: true,
        }
    }

    #[test]
    fn derived_values() {
        let profile = profile();
        assert_eq!(profile.age_in_months(), 360);
        assert!(profile.is_adult());
        assert_eq!(profile.favorite_number_squared(), 12.25);
    }

    #[test]
    fn seventeen_is_not_adult() {
        let profile = UserProfile { age: 17, ..profile() };
        assert!(!profile.is_adult());
        assert_eq!(profile.age_in_months(), 204);
    }

    #[test]
    fn reconstructed_from_scripted_interview() {
        let mut backend = ScriptedBackend::new()
            .with_text("name", "Alice")
            .with_int("age", 30)
            .with_float("favorite_number", 3.5)
            .with_bool("likes_rust", true);

        let answers = backend.collect(&UserProfile::interview()).unwrap();
        assert_eq!(UserProfile::from_answers(&answers).unwrap(), profile());
    }

    #[test]
    fn scripted_interview_enforces_age_bounds() {
        let mut backend = ScriptedBackend::new()
            .with_text("name", "Alice")
            .with_int("age", 200)
            .with_float("favorite_number", 3.5)
            .with_bool("likes_rust", true);

        assert!(backend.collect(&UserProfile::interview()).is_err());
    }

    #[test]
    fn summary_format() {
        let mut output = Vec::new();
        profile().print_summary(&mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Hello, Alice! 👋"));
        assert!(output.contains("You are 30 years old, which is 360 months!"));
        assert!(output.contains("Adult status: true"));
        assert!(output.contains("Your favorite number 3.50 squared is 12.2500"));
        assert!(output.contains("Your age as f64: 30.00"));
        assert!(output.contains("Your favorite number as i64: 3"));
        assert!(output.contains("Age + Favorite Number: 33.50"));
    }

    #[test]
    fn summary_for_negative_favorite() {
        let profile = UserProfile {
            favorite_number: -2.5,
            likes_rust: false,
            ..profile()
        };
        let mut output = Vec::new();
        profile.print_summary(&mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Your favorite number -2.50 squared is 6.2500"));
        assert!(output.contains("Your favorite number as i64: -2"));
        assert!(output.contains("maybe you'll grow to like Rust"));
    }
}
