/**
 * Input Validation
 *
 * Validation rules for the registration and login bodies. Rules and
 * messages match the API contract: nombre required; well-formed email;
 * password 8-20 characters containing at least one uppercase letter,
 * one lowercase letter and one digit.
 */

use crate::auth::handlers::types::{LoginRequest, RegisterRequest};
use crate::error::ApiError;

/// Validate a registration request
pub fn validate_register(request: &RegisterRequest) -> Result<(), ApiError> {
    if request.nombre.trim().is_empty() {
        return Err(ApiError::validation("El nombre es requerido"));
    }
    if !is_valid_email(&request.email) {
        return Err(ApiError::validation("Debe ser un email válido"));
    }
    validate_password(request.password.trim())
}

/// Validate a login request
pub fn validate_login(request: &LoginRequest) -> Result<(), ApiError> {
    if !is_valid_email(&request.email) {
        return Err(ApiError::validation("Debe ser un email válido"));
    }
    if request.password.is_empty() {
        return Err(ApiError::validation("La contraseña es requerida"));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.is_empty() {
        return Err(ApiError::validation("La contraseña es requerida"));
    }
    let length = password.chars().count();
    if !(8..=20).contains(&length) {
        return Err(ApiError::validation(
            "La contraseña debe tener entre 8 y 20 caracteres",
        ));
    }
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !(has_lower && has_upper && has_digit) {
        return Err(ApiError::validation(
            "La contraseña debe contener al menos una mayúscula, una minúscula y un número",
        ));
    }
    Ok(())
}

/// Minimal structural email check: non-empty local part and domain with
/// a dot, no whitespace. Deliverability is not this server's problem.
fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn register(nombre: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            nombre: nombre.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_registration() {
        let request = register("Ana", "a@x.com", "Passw0rd");
        assert!(validate_register(&request).is_ok());
    }

    #[test]
    fn test_empty_nombre_rejected() {
        let request = register("   ", "a@x.com", "Passw0rd");
        assert_matches!(
            validate_register(&request),
            Err(ApiError::Validation(m)) if m == "El nombre es requerido"
        );
    }

    #[test]
    fn test_bad_email_rejected() {
        for email in ["", "no-at-sign", "@x.com", "a@", "a@nodot", "a b@x.com"] {
            let request = register("Ana", email, "Passw0rd");
            assert!(validate_register(&request).is_err(), "accepted {:?}", email);
        }
    }

    #[test]
    fn test_password_length_bounds() {
        let request = register("Ana", "a@x.com", "Pw1shor");
        assert_matches!(
            validate_register(&request),
            Err(ApiError::Validation(m)) if m.contains("entre 8 y 20")
        );

        let request = register("Ana", "a@x.com", &format!("Pw1{}", "a".repeat(18)));
        assert_matches!(
            validate_register(&request),
            Err(ApiError::Validation(m)) if m.contains("entre 8 y 20")
        );
    }

    #[test]
    fn test_password_character_classes() {
        for password in ["passw0rd", "PASSW0RD", "Password"] {
            let request = register("Ana", "a@x.com", password);
            assert_matches!(
                validate_register(&request),
                Err(ApiError::Validation(m)) if m.contains("mayúscula"),
                "accepted {:?}",
                password
            );
        }
    }

    #[test]
    fn test_login_requires_password() {
        let request = LoginRequest {
            email: "a@x.com".to_string(),
            password: String::new(),
        };
        assert_matches!(
            validate_login(&request),
            Err(ApiError::Validation(m)) if m == "La contraseña es requerida"
        );
    }

    #[test]
    fn test_login_valid() {
        let request = LoginRequest {
            email: "a@x.com".to_string(),
            password: "Passw0rd".to_string(),
        };
        assert!(validate_login(&request).is_ok());
    }
}
