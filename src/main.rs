// src/main.rs

// The report is best-effort: a failed write is warned, never a nonzero exit.
fn main() {
    if let Err(e) = count_chars::app::run() {
        eprintln!("[warn] {e}");
    }
}
