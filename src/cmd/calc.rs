use clap::Args;
use marksforge::api::Calculator;
use marksforge::config::FormArgs;
use marksforge::error::MarksResult;
use marksforge::report;

#[derive(Args, Debug, Clone)]
pub struct CalcArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Print the result as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: CalcArgs) -> MarksResult<()> {
    let forms = args.form.build_forms()?;
    let mut calc = Calculator::with_forms(args.form.scheme, forms);
    let result = calc.calculate();

    if args.json {
        println!("{}", report::to_json(result)?);
    } else {
        println!("\n{}", report::render_result(result));
    }
    Ok(())
}
