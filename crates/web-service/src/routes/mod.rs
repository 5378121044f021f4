//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::routes::users::__path_create_user;
use crate::routes::users::__path_delete_user;
use crate::routes::users::__path_get_user;
use crate::routes::users::__path_list_users;
use crate::routes::users::{create_user, delete_user, get_user, list_users};
use crate::AppState;
use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod users;

/// 导出当前App的所有路由
///
/// | 路由 | 接口 |
/// |---|---|
/// | `POST /users` | [`create_user`] |
/// | `GET /users` | [`list_users`] |
/// | `GET /users/{id}` | [`get_user`] |
/// | `DELETE /users/{id}` | [`delete_user`] |
///
/// ## **❗️注意事项：**
///
/// 由于 [`routes!`] 宏限制，在同一个宏里面不能同时定义多个相同类型的http接口，
/// 因此 `/users` 与 `/users/{id}` 分开定义。
fn routers(state: AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_users, create_user))
        .routes(routes!(get_user, delete_user))
        .with_state(state)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由
/// - 使用Scalar作为最终在线文档格式，访问 `/docs`
pub fn create_app_router(shared_state: AppState) -> Router {
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "users", description = "用户管理接口：创建、查询、删除")
        ),
    )]
    struct ApiDoc;

    // - router: Axum的Router，实际的路由对象
    // - api: utoipa的OpenApi，生成的OpenAPI对象
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routers(shared_state))
        .split_for_parts();

    router.merge(Scalar::with_url("/docs", api))
}
