use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    exam_tool::run()
}
