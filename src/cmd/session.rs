use clap::Args;
use marksforge::api::Calculator;
use marksforge::config::FormArgs;
use marksforge::error::MarksResult;
use marksforge::session;
use std::io;

#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    #[command(flatten)]
    pub form: FormArgs,
}

pub fn run(args: SessionArgs) -> MarksResult<()> {
    let forms = args.form.build_forms()?;
    let mut calc = Calculator::with_forms(args.form.scheme, forms);

    let stdin = io::stdin();
    session::run(&mut calc, stdin.lock(), io::stdout().lock())
}
