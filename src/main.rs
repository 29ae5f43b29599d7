use anyhow::Result;

fn main() -> Result<()> {
    cloc_summary::app::run()
}
