// src/common/messages.rs
//! Message catalog that renders failure codes into human text.
//!
//! The validation engine only produces codes; rendering happens at the
//! response boundary.

use crate::validation::{ActionType, EntityKind, FailureCode, ValidationFailure};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// Parses a language tag or an `Accept-Language` value, using the first
    /// tag's primary subtag. Unsupported languages return `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let first = tag.split(',').next().unwrap_or("");
        let primary = first
            .split(';')
            .next()
            .unwrap_or("")
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .trim()
            .to_lowercase();

        match primary.as_str() {
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            _ => None,
        }
    }
}

pub fn resolve(code: FailureCode, locale: Locale, action: Option<ActionType>) -> String {
    let action = action.map(|a| a.as_str()).unwrap_or("UNKNOWN");

    match locale {
        Locale::En => match code {
            FailureCode::FirstNameEmpty => "First name must not be empty.".to_string(),
            FailureCode::LastNameEmpty => "Last name must not be empty.".to_string(),
            FailureCode::EmailEmpty => "Email must not be empty.".to_string(),
            FailureCode::EmailInvalid => "Email is not valid.".to_string(),
            FailureCode::EmailAlreadyExists => "Email already exists.".to_string(),
            FailureCode::TitleEmpty => "Title must not be empty.".to_string(),
            FailureCode::TitleAlreadyExists => "Title already exists.".to_string(),
            FailureCode::CommentEmpty => "Comment must not be empty.".to_string(),
            FailureCode::ActionInvalid => format!("Action {} is not valid.", action),
        },
        Locale::Es => match code {
            FailureCode::FirstNameEmpty => "El nombre no debe estar vacío.".to_string(),
            FailureCode::LastNameEmpty => "El apellido no debe estar vacío.".to_string(),
            FailureCode::EmailEmpty => "El correo no debe estar vacío.".to_string(),
            FailureCode::EmailInvalid => "El correo no es válido.".to_string(),
            FailureCode::EmailAlreadyExists => "El correo ya existe.".to_string(),
            FailureCode::TitleEmpty => "El título no debe estar vacío.".to_string(),
            FailureCode::TitleAlreadyExists => "El título ya existe.".to_string(),
            FailureCode::CommentEmpty => "El comentario no debe estar vacío.".to_string(),
            FailureCode::ActionInvalid => format!("La acción {} no es válida.", action),
        },
    }
}

pub fn render_failure(failure: &ValidationFailure, locale: Locale) -> String {
    resolve(failure.code, locale, failure.action)
}

pub fn validation_failed(locale: Locale) -> String {
    match locale {
        Locale::En => "Validation failed".to_string(),
        Locale::Es => "La validación falló".to_string(),
    }
}

pub fn not_found(kind: EntityKind, id: i64, locale: Locale) -> String {
    match locale {
        Locale::En => format!("{} with id={} not found.", kind.display_name(), id),
        Locale::Es => {
            let name = match kind {
                EntityKind::Instructor => "Instructor",
                EntityKind::Course => "Curso",
                EntityKind::Review => "Reseña",
                EntityKind::Student => "Estudiante",
            };
            format!("{} con id={} no encontrado.", name, id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(Locale::from_tag("en"), Some(Locale::En));
        assert_eq!(Locale::from_tag("en-US,en;q=0.9"), Some(Locale::En));
        assert_eq!(Locale::from_tag("es_ES"), Some(Locale::Es));
        assert_eq!(Locale::from_tag("ES;q=0.8"), Some(Locale::Es));
        assert_eq!(Locale::from_tag("fr-FR"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn test_action_invalid_is_parameterized() {
        let failure = ValidationFailure::action_invalid(ActionType::Delete);
        assert_eq!(
            render_failure(&failure, Locale::En),
            "Action DELETE is not valid."
        );
        assert_eq!(
            render_failure(&failure, Locale::Es),
            "La acción DELETE no es válida."
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            not_found(EntityKind::Course, 999, Locale::En),
            "Course with id=999 not found."
        );
        assert_eq!(
            not_found(EntityKind::Instructor, 3, Locale::Es),
            "Instructor con id=3 no encontrado."
        );
    }

    #[test]
    fn test_every_code_renders_in_every_locale() {
        let codes = [
            FailureCode::FirstNameEmpty,
            FailureCode::LastNameEmpty,
            FailureCode::EmailEmpty,
            FailureCode::EmailInvalid,
            FailureCode::EmailAlreadyExists,
            FailureCode::TitleEmpty,
            FailureCode::TitleAlreadyExists,
            FailureCode::CommentEmpty,
            FailureCode::ActionInvalid,
        ];

        for locale in [Locale::En, Locale::Es] {
            for code in codes {
                assert!(!resolve(code, locale, Some(ActionType::Create)).is_empty());
            }
        }
    }
}
