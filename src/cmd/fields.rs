use clap::Args;
use marksforge::config::FormArgs;
use marksforge::error::MarksResult;
use marksforge::report;

#[derive(Args, Debug, Clone)]
pub struct FieldsArgs {
    #[command(flatten)]
    pub form: FormArgs,
}

pub fn run(args: FieldsArgs) -> MarksResult<()> {
    let forms = args.form.build_forms()?;
    println!("\n{}", report::render_fields(&forms, args.form.scheme)?);
    Ok(())
}
