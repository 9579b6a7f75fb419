use libtest_mimic::{run_tests, Arguments, Outcome, Test};
use std::error::Error;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

mod common;

use emit_test::EmitTest;

#[allow(unused)]
fn main() -> Result<(), Box<dyn Error>> {
    let args = Arguments::from_args();
    let tests = collect_test_files()?;
    run_tests(&args, tests, drive_test).exit();
}

/// Collects all `.pm` system test files, starting from polymat/src/test and visiting all nested
/// directories.
fn collect_test_files() -> Result<Vec<Test<PathBuf>>, Box<dyn Error>> {
    let root_test_path = Path::new("src/test");
    let mut dirs_to_visit = vec![root_test_path.to_path_buf()];
    let mut tests = Vec::with_capacity(32);
    while let Some(dir) = dirs_to_visit.pop() {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_dir() {
                dirs_to_visit.push(path);
                continue;
            }
            if path.extension() == Some(OsStr::new("pm")) {
                let name = path.strip_prefix(root_test_path)?.display().to_string();
                tests.push(Test {
                    name,
                    kind: "system".to_owned(),
                    is_ignored: false,
                    is_bench: false,
                    data: path,
                });
            }
        }
    }
    tests.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(tests)
}

/// Executes a polymat system test.
fn drive_test(test: &Test<PathBuf>) -> Outcome {
    let content = match fs::read_to_string(&test.data) {
        Ok(content) => content,
        Err(e) => return common::fail(format!("cannot read {}: {}", test.data.display(), e)),
    };
    match EmitTest::new(&test.name, content) {
        Ok(emit_test) => emit_test.drive_test(&test.name, &test.data),
        Err(msg) => common::fail(msg),
    }
}
