//! Validation that keeps every error instead of stopping at the first.
//!
//! A `Validation<E, A>` is a `Result` whose error side is a non-empty list.
//! Where `?` and `Result::and_then` stop at the first failing check, the
//! combinators here run all checks and concatenate their errors:
//!
//! ```
//! # use remote_data::validation::combine_validators;
//! fn min_length(s: &String) -> Result<(), &'static str> {
//!     if s.len() >= 6 { Ok(()) } else { Err("at least 6 characters") }
//! }
//! fn one_capital(s: &String) -> Result<(), &'static str> {
//!     if s.chars().any(|c| c.is_ascii_uppercase()) { Ok(()) } else { Err("at least one capital letter") }
//! }
//! fn one_number(s: &String) -> Result<(), &'static str> {
//!     if s.chars().any(|c| c.is_ascii_digit()) { Ok(()) } else { Err("at least one number") }
//! }
//!
//! let password = combine_validators(vec![min_length, one_capital, one_number]);
//! let errors: Vec<_> = password.validate("ab".to_string()).unwrap_err().into();
//! assert_eq!(errors, vec!["at least 6 characters", "at least one capital letter", "at least one number"]);
//! assert!(password.validate("abcdeF1".to_string()).is_ok());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use nonempty::NonEmpty;
use thiserror::Error;

use crate::algebra::{ concat_all, Monoid, Semigroup };
use crate::remote_data::RemoteData;


/// A value that passed validation, or all the reasons it did not.
pub type Validation<E, A> = Result<A, NonEmpty<E>>;

/// Turn a check reporting a single error into one reporting a list.
pub fn lift<A, E, F>(check: F) -> impl Fn(A) -> Validation<E, A>
    where F: Fn(A) -> Result<A, E>,
{
    move |a| check(a).map_err(NonEmpty::new)
}

/// Pair two validations, accumulating the errors of both sides.
pub fn both<E, A, B>(a: Validation<E, A>, b: Validation<E, B>) -> Validation<E, (A, B)> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(errors), Ok(_)) | (Ok(_), Err(errors)) => Err(errors),
        (Err(first), Err(second)) => Err(first.combine(second)),
    }
}

/// Collect many validations, keeping the errors of every failed one in
/// order.
pub fn collect<E, A, I>(validations: I) -> Validation<E, Vec<A>>
    where I: IntoIterator<Item = Validation<E, A>>,
{
    validations.into_iter().fold(Ok(Vec::new()), |acc, v| {
        both(acc, v).map(|(mut items, item)| {
            items.push(item);
            items
        })
    })
}

/// View a finished validation as a settled `RemoteData`.
pub fn to_remote_data<E, A>(validation: Validation<E, A>) -> RemoteData<NonEmpty<E>, A> {
    RemoteData::from_either(validation)
}


/// A reusable check on values of type `A`.
///
/// Validators form a monoid: the empty validator accepts everything, and
/// combining two runs both and keeps the errors of each.
pub struct Validator<A, E> {
    check: Box<dyn Fn(&A) -> Validation<E, ()>>,
}

impl<A: 'static, E: 'static> Validator<A, E> {
    /// A validator from a check that reports at most one error.
    pub fn new<F>(check: F) -> Validator<A, E>
        where F: Fn(&A) -> Result<(), E> + 'static,
    {
        Validator { check: Box::new(move |a| check(a).map_err(NonEmpty::new)) }
    }

    /// A validator from a check that may report several errors.
    pub fn accumulating<F>(check: F) -> Validator<A, E>
        where F: Fn(&A) -> Validation<E, ()> + 'static,
    {
        Validator { check: Box::new(check) }
    }

    /// Check some part of a larger value, such as one field of a form.
    pub fn focus<B, P>(self, project: P) -> Validator<B, E>
        where B: 'static,
              P: Fn(&B) -> &A + 'static,
    {
        Validator::accumulating(move |b| self.check(project(b)))
    }

    /// Run the check, leaving the value with the caller.
    pub fn check(&self, a: &A) -> Validation<E, ()> {
        (self.check)(a)
    }

    /// Run the check and hand the value back if it passed.
    pub fn validate(&self, a: A) -> Validation<E, A> {
        self.check(&a).map(|()| a)
    }
}

impl<A: 'static, E: 'static> Semigroup for Validator<A, E> {
    fn combine(self, other: Validator<A, E>) -> Validator<A, E> {
        Validator::accumulating(move |a| both(self.check(a), other.check(a)).map(|_| ()))
    }
}

impl<A: 'static, E: 'static> Monoid for Validator<A, E> {
    fn empty() -> Validator<A, E> {
        Validator::accumulating(|_| Ok(()))
    }
}

/// Combine single-error checks into one validator that reports every
/// failure, in the order the checks were given.
pub fn combine_validators<A, E, F, I>(checks: I) -> Validator<A, E>
    where A: 'static,
          E: 'static,
          F: Fn(&A) -> Result<(), E> + 'static,
          I: IntoIterator<Item = F>,
{
    concat_all(checks.into_iter().map(Validator::new))
}


/// Per-field errors of a rejected form.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
#[error("invalid fields: {}", join_names(.fields))]
pub struct FormErrors<E: fmt::Debug> {
    /// The errors of each failed field, keyed by field name.
    pub fields: BTreeMap<&'static str, NonEmpty<E>>,
}

fn join_names<V>(fields: &BTreeMap<&'static str, V>) -> String {
    fields.keys().cloned().collect::<Vec<_>>().join(", ")
}

impl<E: fmt::Debug> FormErrors<E> {
    /// The errors reported for one field, if it failed.
    pub fn get(&self, field: &str) -> Option<&NonEmpty<E>> {
        self.fields.get(field)
    }

    /// Number of failed fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false for errors returned by `FormValidator::validate`.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Validates a whole form, with separate rules per named field.
///
/// Rules see the entire form so that fields can be checked against each
/// other. Registering a rule twice for the same field combines them.
pub struct FormValidator<F, E> {
    rules: BTreeMap<&'static str, Validator<F, E>>,
}

impl<F: 'static, E: 'static> Default for FormValidator<F, E> {
    fn default() -> FormValidator<F, E> {
        FormValidator::new()
    }
}

impl<F: 'static, E: 'static> FormValidator<F, E> {
    /// A validator without rules, accepting every form.
    pub fn new() -> FormValidator<F, E> {
        FormValidator { rules: BTreeMap::new() }
    }

    /// Add a rule for the named field.
    pub fn field(mut self, name: &'static str, rule: Validator<F, E>) -> FormValidator<F, E> {
        let rule = match self.rules.remove(name) {
            Some(existing) => existing.combine(rule),
            None => rule,
        };
        self.rules.insert(name, rule);
        self
    }

    /// Run every rule. The form is handed back if all of them pass.
    pub fn validate(&self, form: F) -> Result<F, FormErrors<E>>
        where E: fmt::Debug,
    {
        let fields: BTreeMap<_, _> = self.rules.iter()
            .filter_map(|(&name, rule)| rule.check(&form).err().map(|errors| (name, errors)))
            .collect();
        if fields.is_empty() {
            Ok(form)
        } else {
            let errors = FormErrors { fields };
            debug!("form rejected, {}", errors);
            Err(errors)
        }
    }
}


#[cfg(test)]
mod test {
    use nonempty::NonEmpty;
    use quickcheck::quickcheck;

    use crate::testing::init_logger;
    use crate::RemoteData;
    use super::*;

    fn min_length(s: String) -> Result<String, &'static str> {
        if s.len() >= 6 { Ok(s) } else { Err("at least 6 characters") }
    }

    fn one_capital(s: &String) -> Result<(), &'static str> {
        if s.chars().any(|c| c.is_ascii_uppercase()) { Ok(()) } else { Err("at least one capital letter") }
    }

    fn one_number(s: &String) -> Result<(), &'static str> {
        if s.chars().any(|c| c.is_ascii_digit()) { Ok(()) } else { Err("at least one number") }
    }

    fn is_email(s: &String) -> Result<(), &'static str> {
        let mut parts = s.splitn(2, '@');
        match (parts.next(), parts.next()) {
            (Some(user), Some(domain)) if !user.is_empty() && domain.contains('.') => Ok(()),
            _ => Err("invalid email"),
        }
    }

    fn errors<E>(v: NonEmpty<E>) -> Vec<E> { v.into() }

    #[derive(Debug, PartialEq)]
    struct Form {
        email: String,
        email_confirm: String,
        password: String,
    }

    fn sign_up() -> FormValidator<Form, &'static str> {
        let password = combine_validators(vec![one_capital, one_number]);
        FormValidator::<Form, &'static str>::new()
            .field("password", password.focus(|f: &Form| &f.password))
            .field("password", Validator::new(|f: &Form| min_length(f.password.clone()).map(|_| ())))
            .field("email", Validator::new(|f: &Form| is_email(&f.email)))
            .field("email_confirm", Validator::new(|f: &Form| {
                if f.email == f.email_confirm { Ok(()) } else { Err("needs to match") }
            }))
    }

    #[test]
    fn lift_wraps_single_error() {
        let check = lift(min_length);
        assert_eq!(check("abcdef".to_string()), Ok("abcdef".to_string()));
        assert_eq!(check("ab".to_string()).map_err(errors), Err(vec!["at least 6 characters"]));
    }

    #[test]
    fn both_accumulates() {
        let a: Validation<&str, i32> = Err(NonEmpty::new("a"));
        let b: Validation<&str, i32> = Err(NonEmpty::new("b"));
        assert_eq!(both(a.clone(), b.clone()).map_err(errors), Err(vec!["a", "b"]));
        assert_eq!(both(Ok::<_, NonEmpty<&str>>(1), b.clone()).map_err(errors), Err(vec!["b"]));
        assert_eq!(both(a, Ok(2)).map_err(errors), Err(vec!["a"]));
        assert_eq!(both::<&str, _, _>(Ok(1), Ok(2)), Ok((1, 2)));
    }

    #[test]
    fn collect_keeps_all_errors() {
        let all = vec![Ok(1), Err(NonEmpty::new("x")), Ok(3), Err(NonEmpty::new("y"))];
        assert_eq!(collect(all).map_err(errors), Err(vec!["x", "y"]));
        let good: Vec<Validation<&str, i32>> = vec![Ok(1), Ok(2)];
        assert_eq!(collect(good), Ok(vec![1, 2]));
    }

    #[test]
    fn collect_error_count() {
        fn check(xs: Vec<Result<u8, u8>>) -> bool {
            let total = xs.len();
            let failures = xs.iter().filter(|x| x.is_err()).count();
            let lifted = xs.into_iter().map(|x| x.map_err(NonEmpty::new));
            match collect(lifted) {
                Ok(items) => failures == 0 && items.len() == total,
                Err(errs) => errs.len() == failures,
            }
        }
        quickcheck(check as fn(Vec<Result<u8, u8>>) -> bool);
    }

    #[test]
    fn password_reports_everything() {
        let password = combine_validators(vec![one_capital, one_number]);
        assert_eq!(
            password.validate("ab".to_string()).map_err(errors),
            Err(vec!["at least one capital letter", "at least one number"])
        );
        assert_eq!(password.validate("aB1".to_string()), Ok("aB1".to_string()));
    }

    #[test]
    fn empty_validator_accepts() {
        let v: Validator<i32, ()> = Validator::empty();
        assert_eq!(v.validate(5), Ok(5));
        let none: Vec<fn(&i32) -> Result<(), ()>> = vec![];
        assert_eq!(combine_validators(none).validate(7), Ok(7));
    }

    #[test]
    fn validation_as_remote_data() {
        let rd = to_remote_data::<&str, _>(Ok(1));
        assert_eq!(rd, RemoteData::Success(1));
        let rd = to_remote_data::<_, i32>(Err(NonEmpty::new("no")));
        assert_eq!(rd.error().map(|e| e.len()), Some(1));
    }

    #[test]
    fn form_valid() {
        let form = Form {
            email: "foo@gmail.com".to_string(),
            email_confirm: "foo@gmail.com".to_string(),
            password: "abasdfaA1".to_string(),
        };
        assert_eq!(sign_up().validate(form).map(|f| f.password), Ok("abasdfaA1".to_string()));
    }

    #[test]
    fn form_invalid_fields() {
        init_logger();
        let form = Form {
            email: "foo@gmail.com".to_string(),
            email_confirm: "foo@hotmail.com".to_string(),
            password: "abc".to_string(),
        };
        let rejected = sign_up().validate(form).unwrap_err();
        assert_eq!(rejected.len(), 2);
        assert!(rejected.get("email").is_none());
        assert_eq!(rejected.get("email_confirm").cloned().map(errors), Some(vec!["needs to match"]));
        assert_eq!(
            rejected.get("password").cloned().map(errors),
            Some(vec!["at least one capital letter", "at least one number", "at least 6 characters"])
        );
        assert_eq!(rejected.to_string(), "invalid fields: email_confirm, password");
    }
}
