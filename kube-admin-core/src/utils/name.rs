//! 资源名称校验
//!
//! - Pod / ServiceAccount：DNS-1123 subdomain
//! - Namespace：DNS-1123 label
//! - Role / RoleBinding：路径片段（允许 `system:controller:xxx` 这类名称）

use crate::error::{CoreError, CoreResult};

/// 名称最大长度
pub const MAX_NAME_LENGTH: usize = 253;
/// 命名空间最大长度
pub const MAX_NAMESPACE_LENGTH: usize = 63;

/// 校验资源名称
///
/// 只允许小写字母、数字、`-` 与 `.`，且首尾必须是字母或数字。
pub fn validate_resource_name(name: &str) -> CoreResult<()> {
    if name.is_empty() {
        return Err(CoreError::Validation("name must not be empty".to_string()));
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "name must be at most {MAX_NAME_LENGTH} characters"
        )));
    }

    let allowed = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.';
    if let Some(bad) = name.chars().find(|c| !allowed(*c)) {
        return Err(CoreError::Validation(format!(
            "invalid character '{bad}' in name \"{name}\""
        )));
    }

    let alnum = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit();
    let starts_ok = name.chars().next().is_some_and(alnum);
    let ends_ok = name.chars().next_back().is_some_and(alnum);
    if !starts_ok || !ends_ok {
        return Err(CoreError::Validation(format!(
            "name \"{name}\" must start and end with a lowercase letter or digit"
        )));
    }

    Ok(())
}

/// 校验命名空间名称
///
/// 在 subdomain 规则之上不允许 `.`，长度不超过 63。
pub fn validate_namespace_name(name: &str) -> CoreResult<()> {
    validate_resource_name(name)?;

    if name.len() > MAX_NAMESPACE_LENGTH {
        return Err(CoreError::Validation(format!(
            "namespace must be at most {MAX_NAMESPACE_LENGTH} characters"
        )));
    }
    if name.contains('.') {
        return Err(CoreError::Validation(format!(
            "invalid character '.' in namespace \"{name}\""
        )));
    }

    Ok(())
}

/// 校验可作为 URL 路径片段的名称（RBAC 对象）
pub fn validate_path_segment_name(name: &str) -> CoreResult<()> {
    if name.is_empty() {
        return Err(CoreError::Validation("name must not be empty".to_string()));
    }

    if name == "." || name == ".." {
        return Err(CoreError::Validation(format!("name may not be \"{name}\"")));
    }

    if let Some(bad) = name.chars().find(|c| matches!(c, '/' | '%')) {
        return Err(CoreError::Validation(format!(
            "invalid character '{bad}' in name \"{name}\""
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_names() {
        assert!(validate_resource_name("web-1").is_ok());
        assert!(validate_resource_name("nginx.v2").is_ok());
        assert!(validate_resource_name("a").is_ok());
    }

    #[test]
    fn rejects_invalid_names() {
        assert!(validate_resource_name("").is_err());
        assert!(validate_resource_name("Web").is_err());
        assert!(validate_resource_name("-web").is_err());
        assert!(validate_resource_name("web-").is_err());
        assert!(validate_resource_name("web_1").is_err());
        assert!(validate_resource_name(&"a".repeat(254)).is_err());
    }

    #[test]
    fn namespaces_are_labels() {
        assert!(validate_namespace_name("team-a").is_ok());
        assert!(validate_namespace_name("team.a").is_err());
        assert!(validate_namespace_name(&"n".repeat(64)).is_err());
        assert!(validate_namespace_name("Team").is_err());
    }

    #[test]
    fn rbac_names_allow_colons() {
        assert!(validate_path_segment_name("system:controller:bootstrap-signer").is_ok());
        assert!(validate_path_segment_name("cluster-admin").is_ok());
        assert!(validate_path_segment_name("").is_err());
        assert!(validate_path_segment_name("..").is_err());
        assert!(validate_path_segment_name("a/b").is_err());
        assert!(validate_path_segment_name("50%").is_err());
    }
}
