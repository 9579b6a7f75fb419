use lazy_static::lazy_static;
use libtest_mimic::Outcome;

lazy_static! {
    pub static ref BLESS: bool = std::env::var("BLESS") == Ok("1".into());
}

pub fn fail(msg: impl Into<String>) -> Outcome {
    Outcome::Failed {
        msg: Some(msg.into()),
    }
}

/// Returns the delimiter for a test case clause in a .pm test file.
pub fn get_clause_delim(clause: &str) -> String {
    let prefix = match clause {
        "args" => "!!!",
        "in" => "===",
        "exitcode" | "stdout" | "stderr" => "~~~",
        _ => unreachable!(),
    };
    format!("{}{}", prefix, clause)
}

/// Returns whether a clause can be auto-generated in bless mode.
pub fn can_be_blessed(clause: &str) -> bool {
    matches!(clause, "exitcode" | "stdout" | "stderr")
}

/// Returns the command to bless a test file.
pub fn get_bless_cmd(test_name: &str) -> String {
    format!("BLESS=1 cargo test --test system_tests -- \"{}\"", test_name)
}
