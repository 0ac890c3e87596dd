use minijinja::{AutoEscape, Environment, Error, ErrorKind, Value};

use crate::domain::AppError;

use super::asset_collect::AssetSourceFile;

/// Quote a value as a JSON string literal. Missing answers become `""`.
fn json_string(value: Value) -> Result<String, Error> {
    let text = if value.is_undefined() || value.is_none() {
        String::new()
    } else if let Some(text) = value.as_str() {
        text.to_string()
    } else {
        value.to_string()
    };
    serde_json::to_string(&text).map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))
}

pub fn build_template_environment(
    sources: &[AssetSourceFile],
) -> Result<Environment<'_>, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);

    env.add_filter("json", json_string);

    for source in sources.iter().filter(|source| source.is_template()) {
        env.add_template(source.template_name(), source.content.as_str())
            .map_err(|e| AppError::template_error(source.template_name(), e))?;
    }

    Ok(env)
}

pub fn render_template_by_name(
    env: &Environment<'_>,
    template_name: &str,
    ctx: &Value,
) -> Result<String, AppError> {
    let template =
        env.get_template(template_name).map_err(|e| AppError::template_error(template_name, e))?;

    template.render(ctx).map_err(|e| AppError::template_error(template_name, e))
}
