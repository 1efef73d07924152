use brandboard_shared::records::{
    AdminAccount, BillingRecord, Category, Credentials, CredentialsUpdate, Dispute,
    DisputeStatus, DisputeStatusBody, Insights, NewCategory, RejectBody, Reel, Review, Seller,
    SellerDetails, SellerUpdate,
};
use brandboard_shared::{ApiError, Envelope, FailureBody, ListBody, ListPage, ListQuery};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::config::API_BASE;

// 所有请求都带 cookie（会话凭证在 HttpOnly cookie 里）

fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

/// 统一解码：HTTP 失败时读取 `{ message }` 错误体，成功时按 T 解析。
async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !response.ok() {
        let message = response
            .json::<FailureBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_default();
        return Err(ApiError::Api { status, message });
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(format!("{e:?}")))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;

    decode_json(response).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| ApiError::Decode(format!("{e:?}")))?
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;

    decode_json(response).await
}

async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = Request::put(&api_url(path))
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| ApiError::Decode(format!("{e:?}")))?
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;

    decode_json(response).await
}

async fn put_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::put(&api_url(path))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;

    decode_json(response).await
}

/// Server confirmation line for a mutation, with a fallback when the
/// backend sends none.
fn ack(envelope: Envelope<serde_json::Value>, fallback: &str) -> String {
    envelope
        .message
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// 统一的分页列表请求：page/limit/search/filters 序列化进查询串。
async fn fetch_page<R: DeserializeOwned>(
    resource: &str,
    query: &ListQuery,
) -> Result<ListPage<R>, ApiError> {
    let url = format!("{}{}?{}", API_BASE, resource, query.to_query_string());
    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;

    let envelope: Envelope<ListBody<R>> = decode_json(response).await?;
    let body = envelope
        .data
        .ok_or_else(|| ApiError::Decode("list response missing data".to_string()))?;

    Ok(ListPage::from_body(body, query.page_size))
}

// ---- session ----

/// Sign in with email and password. The backend sets the session cookie.
pub async fn login(credentials: &Credentials) -> Result<AdminAccount, ApiError> {
    let envelope: Envelope<AdminAccount> = post_json("/admin/login", credentials).await?;
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("login response missing admin payload".to_string()))
}

/// Clear the session cookie server-side.
pub async fn logout() -> Result<(), ApiError> {
    let response = Request::post(&api_url("/admin/logout"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;

    let _: Envelope<serde_json::Value> = decode_json(response).await?;
    Ok(())
}

/// Fetch the admin bound to the current cookie, used to restore a
/// session after a page reload.
pub async fn fetch_current_admin() -> Result<AdminAccount, ApiError> {
    let envelope: Envelope<AdminAccount> = get_json("/admin/single").await?;
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("admin response missing payload".to_string()))
}

/// Change login email or password for the signed-in admin.
pub async fn update_credentials(update: &CredentialsUpdate) -> Result<String, ApiError> {
    let envelope = put_json("/admin/update-credentials", update).await?;
    Ok(ack(envelope, "Credentials updated"))
}

// ---- overview ----

/// Dashboard statistics. 该端点直接返回统计对象，没有 data 包装。
pub async fn fetch_insights() -> Result<Insights, ApiError> {
    get_json("/admin/app-insights").await
}

// ---- paginated lists ----

/// Sellers waiting for approval.
pub async fn fetch_pending_sellers(query: &ListQuery) -> Result<ListPage<Seller>, ApiError> {
    fetch_page("/seller/pending", query).await
}

/// All registered sellers regardless of status.
pub async fn fetch_sellers(query: &ListQuery) -> Result<ListPage<Seller>, ApiError> {
    fetch_page("/seller/all", query).await
}

/// Product reviews across the whole marketplace.
pub async fn fetch_reviews(query: &ListQuery) -> Result<ListPage<Review>, ApiError> {
    fetch_page("/product/review/all", query).await
}

/// Seller-uploaded promo reels.
pub async fn fetch_reels(query: &ListQuery) -> Result<ListPage<Reel>, ApiError> {
    fetch_page("/product/reels/admin", query).await
}

/// Bank payout details per seller.
pub async fn fetch_billing(query: &ListQuery) -> Result<ListPage<BillingRecord>, ApiError> {
    fetch_page("/seller/billinginfo", query).await
}

/// Support tickets and order disputes.
pub async fn fetch_disputes(query: &ListQuery) -> Result<ListPage<Dispute>, ApiError> {
    fetch_page("/disputes/all", query).await
}

/// Admin accounts with console access.
pub async fn fetch_admins(query: &ListQuery) -> Result<ListPage<AdminAccount>, ApiError> {
    fetch_page("/admin/all", query).await
}

// ---- row actions ----

/// Approve a pending seller registration.
pub async fn approve_seller(id: &str) -> Result<String, ApiError> {
    let path = format!("/seller/auth/approve-seller/{}", urlencoding::encode(id));
    let envelope = put_empty(&path).await?;
    Ok(ack(envelope, "Seller approved"))
}

/// Reject a pending seller registration with a reason the seller will see.
pub async fn reject_seller(id: &str, reason: &str) -> Result<String, ApiError> {
    let path = format!("/seller/auth/reject-seller/{}", urlencoding::encode(id));
    let body = RejectBody {
        reason: reason.to_string(),
    };
    let envelope = put_json(&path, &body).await?;
    Ok(ack(envelope, "Seller rejected"))
}

/// Overwrite the editable profile fields of a seller.
pub async fn update_seller(id: &str, update: &SellerUpdate) -> Result<String, ApiError> {
    let path = format!("/seller/admin/update/{}", urlencoding::encode(id));
    let envelope = put_json(&path, update).await?;
    Ok(ack(envelope, "Brand updated"))
}

/// Profile plus sales summary for one seller.
pub async fn fetch_seller_details(id: &str) -> Result<SellerDetails, ApiError> {
    let path = format!("/seller/details/{}", urlencoding::encode(id));
    let envelope: Envelope<SellerDetails> = get_json(&path).await?;
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("seller details missing payload".to_string()))
}

/// Move a dispute between pending and resolved.
pub async fn update_dispute_status(id: &str, status: DisputeStatus) -> Result<String, ApiError> {
    let path = format!("/disputes/update/{}", urlencoding::encode(id));
    let body = DisputeStatusBody { status };
    let envelope = put_json(&path, &body).await?;
    Ok(ack(envelope, "Dispute updated"))
}

/// Create another admin account.
pub async fn create_admin(credentials: &Credentials) -> Result<String, ApiError> {
    let envelope = post_json("/admin/new", credentials).await?;
    Ok(ack(envelope, "Admin created"))
}

// ---- categories ----

/// Full category tree (three levels deep).
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    let envelope: Envelope<Vec<Category>> = get_json("/product/categories").await?;
    Ok(envelope.data.unwrap_or_default())
}

/// Add a category under `parent`, or a root category when `parent` is None.
pub async fn create_category(category: &NewCategory) -> Result<String, ApiError> {
    let envelope = post_json("/product/create-categories", category).await?;
    Ok(ack(envelope, "Category created"))
}
