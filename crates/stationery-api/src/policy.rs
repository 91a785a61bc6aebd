//! The storefront's route → access rule table.
//!
//! Business collections keep their Spanish paths (`/api/productos`, ...)
//! because clients address them that way.

use axum::http::Method;

use stationery_auth::{AccessPolicy, AccessRule};
use stationery_core::result::AppResult;
use stationery_entity::RoleName;

fn staff() -> AccessRule {
    AccessRule::any_of([RoleName::EMPLOYEE, RoleName::MANAGER])
}

fn manager() -> AccessRule {
    AccessRule::any_of([RoleName::MANAGER])
}

/// Build the default table. Paths it does not list require authentication.
pub fn default_policy() -> AppResult<AccessPolicy> {
    let mut builder = AccessPolicy::builder()
        // Auth and housekeeping
        .route("/api/auth/**", AccessRule::Public)
        .route("/api/auth/me", AccessRule::AuthenticatedOnly)
        .route("/api/health", AccessRule::Public)
        .route("/api/roles", AccessRule::any_of([RoleName::MANAGER, RoleName::ADMIN]))
        .route("/api/admin/**", AccessRule::any_of([RoleName::ADMIN]))
        // Clientes
        .route_for(Method::GET, "/api/clientes", staff())
        .route_for(Method::POST, "/api/clientes/registro", AccessRule::Public)
        .route_for(Method::GET, "/api/clientes/{id}", AccessRule::AuthenticatedOnly)
        .route_for(Method::PUT, "/api/clientes/{id}", AccessRule::AuthenticatedOnly)
        .route_for(Method::DELETE, "/api/clientes/{id}", manager());

    // Catalog: anyone signed in may browse, staff may edit.
    for base in ["/api/productos", "/api/categorias"] {
        let item = format!("{base}/{{id}}");
        builder = builder
            .route_for(Method::GET, base, AccessRule::AuthenticatedOnly)
            .route_for(Method::GET, &item, AccessRule::AuthenticatedOnly)
            .route_for(Method::POST, base, staff())
            .route_for(Method::PUT, &item, staff())
            .route_for(Method::DELETE, &item, manager());
    }

    // Back office: staff only, deletes by a manager.
    for base in ["/api/inventarios", "/api/proveedores"] {
        builder = builder
            .route(&format!("{base}/**"), staff())
            .route_for(Method::DELETE, &format!("{base}/{{id}}"), manager());
    }

    // Customer-facing records: a customer may read their own and create.
    for base in ["/api/pedidos", "/api/reservas", "/api/notificaciones"] {
        builder = builder
            .route_for(Method::GET, base, staff())
            .route_for(Method::GET, &format!("{base}/{{id}}"), AccessRule::AuthenticatedOnly)
            .route_for(
                Method::GET,
                &format!("{base}/cliente/{{clienteId}}"),
                AccessRule::AuthenticatedOnly,
            )
            .route_for(Method::PUT, &format!("{base}/{{id}}"), staff());
    }

    builder
        .route_for(Method::POST, "/api/pedidos", AccessRule::AuthenticatedOnly)
        .route_for(Method::DELETE, "/api/pedidos/{id}", manager())
        .route_for(Method::POST, "/api/reservas", AccessRule::AuthenticatedOnly)
        .route_for(Method::DELETE, "/api/reservas/{id}", staff())
        .route_for(Method::POST, "/api/notificaciones", staff())
        .route_for(Method::DELETE, "/api/notificaciones/{id}", staff())
        .build()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use stationery_auth::{AccessDenial, AccessPolicyEvaluator, SecurityContext};

    use super::*;

    fn evaluator() -> AccessPolicyEvaluator {
        AccessPolicyEvaluator::new(default_policy().unwrap())
    }

    fn as_role(role: RoleName) -> SecurityContext {
        SecurityContext::authenticated("someone@test.com", BTreeSet::from([role]))
    }

    fn allowed(method: Method, path: &str, ctx: &SecurityContext) -> bool {
        evaluator().evaluate(&method, path, ctx).is_ok()
    }

    #[test]
    fn test_public_routes() {
        let anon = SecurityContext::anonymous();
        assert!(allowed(Method::POST, "/api/auth/signin", &anon));
        assert!(allowed(Method::POST, "/api/auth/register", &anon));
        assert!(allowed(Method::POST, "/api/clientes/registro", &anon));
        assert!(allowed(Method::GET, "/api/health", &anon));
        assert!(!allowed(Method::GET, "/api/auth/me", &anon));
        assert!(!allowed(Method::GET, "/api/clientes/registro", &anon));
    }

    #[test]
    fn test_catalog_rules() {
        let customer = as_role(RoleName::CUSTOMER);
        let employee = as_role(RoleName::EMPLOYEE);
        let manager = as_role(RoleName::MANAGER);

        assert!(allowed(Method::GET, "/api/productos", &customer));
        assert!(allowed(Method::GET, "/api/categorias/3", &customer));
        assert!(!allowed(Method::POST, "/api/productos", &customer));
        assert!(allowed(Method::POST, "/api/productos", &employee));
        assert!(!allowed(Method::DELETE, "/api/productos/3", &employee));
        assert!(allowed(Method::DELETE, "/api/productos/3", &manager));
    }

    #[test]
    fn test_back_office_rules() {
        let customer = as_role(RoleName::CUSTOMER);
        let employee = as_role(RoleName::EMPLOYEE);

        assert!(!allowed(Method::GET, "/api/inventarios", &customer));
        assert!(allowed(Method::GET, "/api/inventarios/producto/9", &employee));
        assert!(allowed(Method::PUT, "/api/proveedores/9", &employee));
        assert!(!allowed(Method::DELETE, "/api/proveedores/9", &employee));
    }

    #[test]
    fn test_customer_records() {
        let customer = as_role(RoleName::CUSTOMER);
        let employee = as_role(RoleName::EMPLOYEE);

        assert!(!allowed(Method::GET, "/api/pedidos", &customer));
        assert!(allowed(Method::GET, "/api/pedidos/cliente/4", &customer));
        assert!(allowed(Method::POST, "/api/pedidos", &customer));
        assert!(!allowed(Method::DELETE, "/api/pedidos/4", &employee));
        assert!(allowed(Method::DELETE, "/api/reservas/4", &employee));
        assert!(!allowed(Method::POST, "/api/notificaciones", &customer));
    }

    #[test]
    fn test_admin_and_roles() {
        let manager = as_role(RoleName::MANAGER);
        let admin = as_role(RoleName::ADMIN);

        assert!(allowed(Method::GET, "/api/roles", &manager));
        assert!(allowed(Method::GET, "/api/roles", &admin));
        assert_eq!(
            evaluator().evaluate(&Method::GET, "/api/admin/users", &manager),
            Err(AccessDenial::AuthorizationDenied {
                required: BTreeSet::from([RoleName::ADMIN])
            })
        );
        assert!(allowed(Method::GET, "/api/admin/users", &admin));
    }

    #[test]
    fn test_unlisted_collection_requires_login() {
        assert!(!allowed(Method::GET, "/api/sucursales", &SecurityContext::anonymous()));
        assert!(allowed(Method::GET, "/api/sucursales", &as_role(RoleName::CUSTOMER)));
    }
}
