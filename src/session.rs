use tienda_core::Catalog;

/// Identity facts supplied by the external account service. The tool
/// never authenticates; it only checks the supplied identity against
/// the catalog's admin list.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: String,
}

/// Resolve the caller's session from the CLI flag or the environment.
pub fn resolve(flag: Option<&str>) -> Option<Session> {
    let user_id = flag
        .map(str::to_string)
        .or_else(|| std::env::var("TIENDA_SESSION").ok())?;

    let user_id = user_id.trim().to_string();
    if user_id.is_empty() {
        return None;
    }

    Some(Session { user_id })
}

pub fn is_admin(catalog: &Catalog, session: &Session) -> bool {
    catalog.admin_users.iter().any(|u| u == &session.user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_with_admin(user: &str) -> Catalog {
        Catalog {
            products: Vec::new(),
            admin_users: vec![user.to_string()],
            extra: Default::default(),
        }
    }

    #[test]
    fn test_flag_beats_environment() {
        let session = resolve(Some("admin-1")).unwrap();
        assert_eq!(session.user_id, "admin-1");
    }

    #[test]
    fn test_blank_flag_yields_no_session() {
        assert!(resolve(Some("   ")).is_none());
    }

    #[test]
    fn test_admin_membership() {
        let catalog = catalog_with_admin("admin-1");
        assert!(is_admin(&catalog, &Session { user_id: "admin-1".to_string() }));
        assert!(!is_admin(&catalog, &Session { user_id: "visitor".to_string() }));
    }
}
