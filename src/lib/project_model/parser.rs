use crate::tools::SyntaxTreeTool;

#[derive(Debug, PartialEq, Eq)]
pub struct ParserModel {
    pub program: String,
    pub extra_args: Vec<String>,
}

impl From<&ParserModel> for SyntaxTreeTool {
    fn from(model: &ParserModel) -> Self {
        Self {
            program: model.program.clone(),
            extra_args: model.extra_args.clone(),
        }
    }
}
