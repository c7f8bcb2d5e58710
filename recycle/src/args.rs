use crate::error::RecycleError;
use crate::params::ParameterSpec;
use crate::value::Argument;

/// The arguments of one call site, positional and named, exactly as written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArguments {
    positional: Vec<Argument>,
    named: Vec<(String, Argument)>,
}

impl CallArguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn positional(mut self, arg: impl Into<Argument>) -> Self {
        self.positional.push(arg.into());
        self
    }

    pub fn named(mut self, name: impl Into<String>, arg: impl Into<Argument>) -> Self {
        self.named.push((name.into(), arg.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Matches the call's arguments to the declared parameters.
    ///
    /// Positional arguments fill parameters in declaration order, named arguments
    /// fill the parameter of that name. Parameters left unfilled are resolved later
    /// through their defaults.
    pub fn bind(&self, spec: &ParameterSpec) -> Result<BoundArguments, RecycleError> {
        if self.positional.len() > spec.len() {
            return Err(RecycleError::TooManyArguments {
                expected: spec.len(),
                given: self.positional.len(),
            });
        }

        let mut slots: Vec<Option<Argument>> = vec![None; spec.len()];
        for (slot, arg) in slots.iter_mut().zip(&self.positional) {
            *slot = Some(arg.clone());
        }

        for (name, arg) in &self.named {
            let idx = spec
                .position(name)
                .ok_or_else(|| RecycleError::UnknownArgument(name.clone()))?;
            if slots[idx].is_some() {
                return Err(RecycleError::DuplicateArgument(name.clone()));
            }
            slots[idx] = Some(arg.clone());
        }

        let entries = spec
            .names()
            .zip(slots)
            .filter_map(|(name, slot)| slot.map(|arg| (name.to_owned(), arg)))
            .collect();
        Ok(BoundArguments { entries })
    }
}

/// Supplied arguments keyed by parameter name. Unsupplied parameters are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundArguments {
    entries: Vec<(String, Argument)>,
}

impl BoundArguments {
    pub fn get(&self, name: &str) -> Option<&Argument> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, arg)| arg)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Argument)> {
        self.entries.iter().map(|(n, arg)| (n.as_str(), arg))
    }
}

/// Builds named-only [`CallArguments`]: `args! { a => 5, k => [1, 2, 3] }`.
#[macro_export]
macro_rules! args {
    () => {
        $crate::CallArguments::new()
    };
    ($($name:ident => $value:expr),+ $(,)?) => {
        $crate::CallArguments::new()
            $(.named(stringify!($name), $value))+
    };
}
