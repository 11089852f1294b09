//! Builder collecting scaffold inputs from flags, prompts or callers.

use crate::ports::Prompter;

use super::{AppError, ResolverType, ScaffoldRequest};

/// Collects resolver inputs. Values set explicitly always win; the
/// interactive step only asks for what is still missing.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldRequestBuilder {
    resolver_type: Option<String>,
    resolver_name: Option<String>,
    unit_name: Option<String>,
    ask_unit_name: bool,
}

impl ScaffoldRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolver_type(mut self, value: Option<impl Into<String>>) -> Self {
        self.resolver_type = value.map(Into::into);
        self
    }

    pub fn resolver_name(mut self, value: Option<impl Into<String>>) -> Self {
        self.resolver_name = value.map(Into::into);
        self
    }

    pub fn unit_name(mut self, value: Option<impl Into<String>>) -> Self {
        self.unit_name = value.map(Into::into);
        self
    }

    /// Also prompt for the unit name when it was not supplied.
    pub fn ask_unit_name(mut self, ask: bool) -> Self {
        self.ask_unit_name = ask;
        self
    }

    /// Prompt for every missing value.
    pub fn fill_missing<P: Prompter>(mut self, prompter: &P) -> Result<Self, AppError> {
        if self.resolver_type.is_none() {
            let items: Vec<&str> = ResolverType::ALL.iter().map(|kind| kind.cli_name()).collect();
            let selection = prompter.select("Select resolver type", &items)?;
            let kind = items.get(selection).ok_or_else(|| {
                AppError::config_error(format!("Resolver type selection {selection} out of range"))
            })?;
            self.resolver_type = Some((*kind).to_string());
        }

        if self.resolver_name.is_none() {
            self.resolver_name = Some(prompter.input("Resolver field name", false)?);
        }

        let schema_needs_unit = self.needs_unit_name();
        if (self.ask_unit_name || schema_needs_unit) && self.unit_name.is_none() {
            let unit =
                prompter.input("Unit name (singular GraphQL type, e.g. Post)", !schema_needs_unit)?;
            self.unit_name = Some(unit);
        }

        Ok(self)
    }

    /// A schema fragment will be generated, so the unit name is mandatory.
    fn needs_unit_name(&self) -> bool {
        self.resolver_type
            .as_deref()
            .and_then(|label| label.parse::<ResolverType>().ok())
            .is_some_and(ResolverType::has_schema)
    }

    /// Validate and produce the request.
    ///
    /// Query and Mutation resolvers need a unit name for their schema
    /// fragment.
    pub fn build(self) -> Result<ScaffoldRequest, AppError> {
        let type_label = self
            .resolver_type
            .ok_or_else(|| AppError::config_error("Resolver type is required (--type)."))?;
        let resolver_type: ResolverType = type_label.parse()?;

        let resolver_name = self
            .resolver_name
            .ok_or_else(|| AppError::config_error("Resolver name is required (--name)."))?;
        validate_resolver_name(&resolver_name)?;

        let unit_name =
            self.unit_name.map(|u| u.trim().to_string()).filter(|unit| !unit.is_empty());
        if unit_name.is_none() && resolver_type.has_schema() {
            return Err(AppError::config_error(format!(
                "Unit name is required for {resolver_type} resolvers (--unit-name)."
            )));
        }

        Ok(ScaffoldRequest {
            resolver_type,
            type_label: type_label.trim().to_string(),
            resolver_name,
            unit_name,
        })
    }
}

fn validate_resolver_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::config_error("Resolver name cannot be empty."));
    }

    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(AppError::config_error(format!(
            "Resolver name '{name}' must be a plain field name."
        )));
    }

    Ok(())
}
