//! CLI validation probe.
//!
//! # Responsibility
//! - Open a library folder, import it and print the validation result.
//! - Keep output deterministic for quick local sanity checks.

use polybook_core::store::layout;
use polybook_core::{validate, DirStore};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let Some(root) = args.next() else {
        println!("polybook_core version={}", polybook_core::core_version());
        println!("usage: polybook_cli <library-folder>");
        return ExitCode::SUCCESS;
    };

    let store = DirStore::new(root);
    let library = match layout::import(&store) {
        Ok(library) => library,
        Err(err) => {
            eprintln!("import failed: {err}");
            return ExitCode::from(2);
        }
    };

    println!(
        "loaded categories={} articles={} languages={}",
        library.categories.len(),
        library.articles.len(),
        library.languages.len()
    );

    let violations = validate(&library);
    if violations.is_empty() {
        println!("all checks passed");
        return ExitCode::SUCCESS;
    }
    for violation in &violations {
        println!("violation: {violation}");
    }
    ExitCode::FAILURE
}
