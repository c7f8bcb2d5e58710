use crate::error::RecycleError;
use crate::value::Value;

/// One declared parameter of a target function.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub default: Option<Value>,
}

impl Parameter {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    pub fn optional(name: impl Into<String>, default: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
        }
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// The declared parameter list of a target function, in declaration order.
///
/// Built once per function and shared by every call. Never empty, names are unique.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Parameter>", into = "Vec<Parameter>"))]
pub struct ParameterSpec {
    params: Vec<Parameter>,
}

impl ParameterSpec {
    pub fn new(params: Vec<Parameter>) -> Result<Self, RecycleError> {
        if params.is_empty() {
            return Err(RecycleError::EmptySpec);
        }
        for (i, param) in params.iter().enumerate() {
            if params[..i].iter().any(|p| p.name == param.name) {
                return Err(RecycleError::DuplicateParameter(param.name.clone()));
            }
        }
        Ok(Self { params })
    }

    pub fn builder() -> ParameterSpecBuilder {
        ParameterSpecBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Always false for a validated spec, kept for the `len` convention.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.name.as_str())
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|p| p.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name == name)
    }
}

impl TryFrom<Vec<Parameter>> for ParameterSpec {
    type Error = RecycleError;

    fn try_from(params: Vec<Parameter>) -> Result<Self, Self::Error> {
        Self::new(params)
    }
}

impl From<ParameterSpec> for Vec<Parameter> {
    fn from(spec: ParameterSpec) -> Self {
        spec.params
    }
}

#[derive(Debug, Default)]
pub struct ParameterSpecBuilder {
    params: Vec<Parameter>,
}

impl ParameterSpecBuilder {
    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.params.push(Parameter::required(name));
        self
    }

    pub fn optional(mut self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.params.push(Parameter::optional(name, default));
        self
    }

    pub fn build(self) -> Result<ParameterSpec, RecycleError> {
        ParameterSpec::new(self.params)
    }
}

/// Declares a [`ParameterSpec`] the way a function signature reads.
///
/// `params![a, b, k, multby2 = true]` evaluates to `Result<ParameterSpec, RecycleError>`.
#[macro_export]
macro_rules! params {
    ($($name:ident $(= $default:expr)?),+ $(,)?) => {
        $crate::ParameterSpec::new(vec![
            $($crate::params!(@param $name $(= $default)?)),+
        ])
    };
    (@param $name:ident) => {
        $crate::Parameter::required(stringify!($name))
    };
    (@param $name:ident = $default:expr) => {
        $crate::Parameter::optional(stringify!($name), $default)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order_is_kept() {
        let spec = params![a, b, k, multby2 = true].unwrap();
        assert_eq!(spec.names().collect::<Vec<_>>(), vec!["a", "b", "k", "multby2"]);
        assert_eq!(spec.position("k"), Some(2));
        assert!(spec.get("multby2").unwrap().has_default());
        assert!(!spec.get("a").unwrap().has_default());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let spec = ParameterSpec::builder().required("s").optional("s", 1.0).build();
        assert_eq!(spec, Err(RecycleError::DuplicateParameter("s".into())));
    }

    #[test]
    fn empty_spec_is_rejected() {
        assert_eq!(ParameterSpec::new(vec![]), Err(RecycleError::EmptySpec));
    }
}
