use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

/// What kind of name a spreadsheet holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Brand,
    Category,
}

impl Category {
    /// Lowercase label used inside the prompt
    pub fn label(&self) -> &'static str {
        match self {
            Category::Brand => "brand",
            Category::Category => "category",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "brand" => Ok(Category::Brand),
            "category" => Ok(Category::Category),
            other => Err(format!(
                "unknown category '{}' (expected 'brand' or 'category')",
                other
            )),
        }
    }
}

const PREAMBLE: &str = "You are an expert in brand/category standardization.\n\n";
const FORMAT_DIRECTIVE: &str =
    "Format: numbered list (only the standardized names, no extra text).\n\n";

/// Build the instruction prompt for one batch.
///
/// Names are listed 1-indexed, one per line, after the fixed instructions.
/// Line breaks inside a name are folded into single spaces.
pub fn build_prompt<S: AsRef<str>>(names: &[S], category: Category) -> String {
    let label = category.label();
    let mut prompt = String::with_capacity(256 + names.len() * 32);

    prompt.push_str(PREAMBLE);
    let _ = writeln!(
        prompt,
        "For each {label} name given, return the best standardized {label} name."
    );
    prompt.push_str(FORMAT_DIRECTIVE);

    for (idx, name) in names.iter().enumerate() {
        let _ = write!(prompt, "{}.", idx + 1);
        for word in name.as_ref().split_whitespace() {
            prompt.push(' ');
            prompt.push_str(word);
        }
        prompt.push('\n');
    }

    prompt
}
