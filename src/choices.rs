//! Resolving a list of choice labels into what the player actually sees.
//!
//! Each label may carry a disable condition and a hide condition. Resolving
//! strips the conditions from the label, evaluates them, drops hidden choices
//! and marks disabled ones. Broken conditions never abort the list: they are
//! logged, recorded as [`Diagnostic`]s, and count as `false`.
//!
//! Hosts typically resolve twice per render: [`Resolver::preview_resolve`]
//! while sizing the window, then [`Resolver::final_resolve`] when building the
//! interactive list. Neither pass touches its input, so both agree as long as
//! the variable store does not change in between.

use crate::{
    evaluator::{EvalError, evaluate},
    parser::{ParseError, compile},
    tags::{TagKind, TagSet, extract},
    value::Value,
    variables::VariableStore,
};

/// A choice after its conditions have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChoice {
    /// Position of the choice in the input list
    pub index: usize,
    /// Label with condition regions removed
    pub text: String,
    pub enabled: bool,
    pub hidden: bool,
}

/// Why a condition was treated as `false`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConditionError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    /// The condition evaluated to a number instead of a boolean
    #[error("condition must be a boolean, got {0}")]
    NotACondition(Value),
}

/// One condition that failed during a resolution pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Position of the choice in the input list
    pub index: usize,
    pub kind: TagKind,
    /// Raw condition text as written between the markers
    pub condition: String,
    pub error: ConditionError,
}

/// Output of [`Resolver::resolve_with_diagnostics`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resolution {
    pub choices: Vec<ResolvedChoice>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Applies disable/hide conditions to choice labels.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    tags: TagSet,
}

impl Resolver {
    pub fn new(tags: TagSet) -> Self {
        Resolver { tags }
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Resolve a single label, including hidden ones.
    pub fn resolve_one<V: VariableStore + ?Sized>(
        &self,
        index: usize,
        label: &str,
        variables: &V,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> ResolvedChoice {
        let extracted = extract(label, &self.tags);

        let mut check = |kind: TagKind| -> bool {
            let Some(raw) = extracted.condition(kind) else {
                return false;
            };
            match check_condition(raw, variables) {
                Ok(result) => result,
                Err(error) => {
                    log::warn!(
                        "choice {}: {} condition `{}` treated as false: {}",
                        index,
                        kind,
                        raw,
                        error
                    );
                    diagnostics.push(Diagnostic {
                        index,
                        kind,
                        condition: raw.to_string(),
                        error,
                    });
                    false
                }
            }
        };

        let disabled = check(TagKind::Disable);
        let hidden = check(TagKind::Hide);

        let choice = ResolvedChoice {
            index,
            text: extracted.text,
            enabled: !disabled,
            hidden,
        };
        log::debug!(
            "choice {}: {:?} enabled={} hidden={}",
            index,
            choice.text,
            choice.enabled,
            choice.hidden
        );
        choice
    }

    /// Resolve every label, dropping hidden choices and collecting every
    /// condition that failed.
    pub fn resolve_with_diagnostics<S, V>(&self, options: &[S], variables: &V) -> Resolution
    where
        S: AsRef<str>,
        V: VariableStore + ?Sized,
    {
        let mut resolution = Resolution::default();
        for (index, option) in options.iter().enumerate() {
            let choice =
                self.resolve_one(index, option.as_ref(), variables, &mut resolution.diagnostics);
            if !choice.hidden {
                resolution.choices.push(choice);
            }
        }
        resolution
    }

    /// Resolve every label, dropping hidden choices.
    ///
    /// # Examples
    ///
    /// ```
    /// use choice_conditions::Resolver;
    ///
    /// let vars = vec![0.0, 0.0, 0.0, 90.0];
    /// let labels = [
    ///     "<dis>true</dis>Locked",
    ///     r"<hide>\v[3] == 90</hide>Secret",
    ///     "Open",
    /// ];
    ///
    /// let choices = Resolver::default().resolve(&labels, &vars);
    /// assert_eq!(choices.len(), 2);
    /// assert_eq!(choices[0].text, "Locked");
    /// assert!(!choices[0].enabled);
    /// assert_eq!(choices[1].index, 2);
    /// ```
    pub fn resolve<S, V>(&self, options: &[S], variables: &V) -> Vec<ResolvedChoice>
    where
        S: AsRef<str>,
        V: VariableStore + ?Sized,
    {
        self.resolve_with_diagnostics(options, variables).choices
    }

    /// Display texts of the visible choices, for layout sizing.
    pub fn preview_resolve<S, V>(&self, options: &[S], variables: &V) -> Vec<String>
    where
        S: AsRef<str>,
        V: VariableStore + ?Sized,
    {
        self.resolve(options, variables)
            .into_iter()
            .map(|choice| choice.text)
            .collect()
    }

    /// The interactive list: visible choices with their enabled flags.
    pub fn final_resolve<S, V>(&self, options: &[S], variables: &V) -> Vec<ResolvedChoice>
    where
        S: AsRef<str>,
        V: VariableStore + ?Sized,
    {
        self.resolve(options, variables)
    }
}

/// Compile and evaluate one raw condition down to a boolean.
pub fn check_condition<V: VariableStore + ?Sized>(
    raw: &str,
    variables: &V,
) -> Result<bool, ConditionError> {
    let expr = compile(raw)?;
    match evaluate(&expr, variables)? {
        Value::Boolean(b) => Ok(b),
        other => Err(ConditionError::NotACondition(other)),
    }
}

/// Resolve `options` with the default `<dis>` / `<hide>` markers.
pub fn resolve<S, V>(options: &[S], variables: &V) -> Vec<ResolvedChoice>
where
    S: AsRef<str>,
    V: VariableStore + ?Sized,
{
    Resolver::default().resolve(options, variables)
}
