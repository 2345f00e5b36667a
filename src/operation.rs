//! Call-signature descriptors.

use std::fmt;

/// The declared signature of a remote call: owning type, method name, and
/// parameter types.
///
/// An `Operation` is populated once by the dispatch layer when a service
/// method is resolved and then shared by every [`Invocation`](crate::Invocation)
/// of that method. It only identifies the call; nothing here can invoke it.
///
/// # Examples
///
/// ```
/// use invocation_core::Operation;
///
/// let op = Operation::new("api::GitHubService", "contributors")
///     .with_parameter("String")
///     .with_parameter("String");
///
/// assert_eq!(op.simple_type_name(), "GitHubService");
/// assert_eq!(op.to_string(), "api::GitHubService.contributors(String, String)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Operation {
    declaring_type: String,
    name: String,
    parameter_types: Vec<String>,
}

impl Operation {
    /// Creates a descriptor for a method with no parameters.
    pub fn new(declaring_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            declaring_type: declaring_type.into(),
            name: name.into(),
            parameter_types: Vec::new(),
        }
    }

    /// Appends a declared parameter type.
    pub fn with_parameter(mut self, parameter_type: impl Into<String>) -> Self {
        self.parameter_types.push(parameter_type.into());
        self
    }

    /// Replaces the declared parameter types.
    pub fn with_parameters<I, S>(mut self, parameter_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameter_types = parameter_types.into_iter().map(Into::into).collect();
        self
    }

    /// Fully qualified name of the owning type.
    pub fn declaring_type(&self) -> &str {
        &self.declaring_type
    }

    /// Owning type name without its module or package path.
    pub fn simple_type_name(&self) -> &str {
        let qualified = self.declaring_type.as_str();
        let after_path = qualified.rsplit("::").next().unwrap_or(qualified);
        after_path.rsplit('.').next().unwrap_or(after_path)
    }

    /// Method name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameter types, in order.
    pub fn parameter_types(&self) -> &[String] {
        &self.parameter_types
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}({})",
            self.declaring_type,
            self.name,
            self.parameter_types.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_type_name_strips_rust_paths() {
        let op = Operation::new("client::api::Users", "list");
        assert_eq!(op.simple_type_name(), "Users");
    }

    #[test]
    fn simple_type_name_strips_dotted_paths() {
        let op = Operation::new("com.example.Users", "list");
        assert_eq!(op.simple_type_name(), "Users");
    }

    #[test]
    fn simple_type_name_without_path() {
        let op = Operation::new("Users", "list");
        assert_eq!(op.simple_type_name(), "Users");
    }

    #[test]
    fn parameters_keep_declaration_order() {
        let op = Operation::new("Users", "find")
            .with_parameters(["u64", "bool"])
            .with_parameter("String");

        assert_eq!(op.parameter_types(), ["u64", "bool", "String"]);
        assert_eq!(op.to_string(), "Users.find(u64, bool, String)");
    }

    #[test]
    fn descriptors_compare_structurally() {
        let a = Operation::new("Users", "find").with_parameter("u64");
        let b = Operation::new("Users", "find").with_parameter("u64");
        let c = Operation::new("Users", "find").with_parameter("i64");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
