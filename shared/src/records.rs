//! Business records carried by the back-office API, plus the typed
//! request bodies the screens submit.

use serde::{Deserialize, Serialize};

// 卖家状态与嵌套结构

/// Review workflow status of a seller (brand) account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SellerStatus {
    /// Awaiting review.
    #[default]
    Pending,
    /// Cleared to sell.
    Approved,
    /// Application turned down.
    Rejected,
    /// Suspended after approval.
    Blocked,
}

impl SellerStatus {
    /// Every status an admin can assign in the edit dialog.
    pub const ALL: [SellerStatus; 4] = [
        SellerStatus::Pending,
        SellerStatus::Approved,
        SellerStatus::Rejected,
        SellerStatus::Blocked,
    ];

    /// Wire value; also keys the status chip styling.
    pub fn as_str(&self) -> &'static str {
        match self {
            SellerStatus::Pending => "pending",
            SellerStatus::Approved => "approved",
            SellerStatus::Rejected => "rejected",
            SellerStatus::Blocked => "blocked",
        }
    }
}

impl std::fmt::Display for SellerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handling status of a support ticket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisputeStatus {
    /// Awaiting an admin.
    #[default]
    Pending,
    /// Closed as handled.
    Resolved,
}

impl DisputeStatus {
    /// Wire value; also keys the status chip styling.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisputeStatus::Pending => "pending",
            DisputeStatus::Resolved => "resolved",
        }
    }
}

impl std::fmt::Display for DisputeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the marketplace opened a support ticket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisputeParty {
    /// A brand.
    #[default]
    Seller,
    /// A shopper.
    Buyer,
}

impl DisputeParty {
    /// Wire value, used as the `fromType` filter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisputeParty::Seller => "seller",
            DisputeParty::Buyer => "buyer",
        }
    }
}

/// Reference to an uploaded asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Public URL of the asset.
    #[serde(default)]
    pub url: String,
}

/// Social profiles a brand may link. Empty string means not provided.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    /// Instagram profile URL.
    pub instagram: String,
    /// Facebook page URL.
    pub facebook: String,
    /// Twitter/X profile URL.
    pub twitter: String,
    /// LinkedIn page URL.
    pub linkedin: String,
}

/// Payout account of a brand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BankDetails {
    /// Bank name.
    pub bank_name: String,
    /// Account number, rendered verbatim.
    pub account_number: String,
    /// Name the account is held under.
    pub account_holder_name: String,
}

/// Seller (brand) account as listed and edited by admins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    /// Record id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name of the brand.
    #[serde(default)]
    pub brand_name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Contact phone number.
    #[serde(default)]
    pub contact_number: String,
    /// Free-text description.
    #[serde(default)]
    pub brand_description: String,
    /// Registered business address.
    #[serde(default)]
    pub business_address: String,
    /// Workflow status.
    #[serde(default)]
    pub status: SellerStatus,
    /// Brand logo, when uploaded.
    #[serde(default)]
    pub logo: Option<ImageRef>,
    /// Linked social profiles.
    #[serde(default)]
    pub social_links: SocialLinks,
    /// Payout account.
    #[serde(default)]
    pub bank_details: BankDetails,
    /// Creation timestamp as sent by the server.
    #[serde(default)]
    pub created_at: String,
}

/// Editable subset of a [`Seller`] sent to the update endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerUpdate {
    /// Display name of the brand.
    pub brand_name: String,
    /// Contact phone number.
    pub contact_number: String,
    /// Free-text description.
    pub brand_description: String,
    /// Registered business address.
    pub business_address: String,
    /// Workflow status.
    pub status: SellerStatus,
    /// Linked social profiles.
    pub social_links: SocialLinks,
    /// Payout account.
    pub bank_details: BankDetails,
}

impl From<&Seller> for SellerUpdate {
    fn from(s: &Seller) -> Self {
        SellerUpdate {
            brand_name: s.brand_name.clone(),
            contact_number: s.contact_number.clone(),
            brand_description: s.brand_description.clone(),
            business_address: s.business_address.clone(),
            status: s.status,
            social_links: s.social_links.clone(),
            bank_details: s.bank_details.clone(),
        }
    }
}

/// Product rollup row in the seller detail dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    /// Record id.
    #[serde(rename = "_id", default)]
    pub id: String,
    /// Product name.
    #[serde(default)]
    pub name: String,
    /// Unit price.
    #[serde(default)]
    pub price: f64,
    /// Units sold to date.
    #[serde(default)]
    pub total_sold: u64,
}

/// Seller profile plus product rollups, for the detail dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerDetails {
    /// The seller account.
    pub seller: Seller,
    /// Best-selling products.
    #[serde(default)]
    pub top_products: Vec<ProductSummary>,
    /// Most recently added products.
    #[serde(default)]
    pub recent_products: Vec<ProductSummary>,
    /// Catalog size.
    #[serde(default)]
    pub total_products: u64,
}

/// Back-office operator account; doubles as the signed-in identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    /// Record id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Sign-in email.
    pub email: String,
    /// Creation timestamp as sent by the server.
    #[serde(default)]
    pub created_at: String,
}

/// Buyer review of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Record id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Star rating, 1 through 5.
    #[serde(default)]
    pub rating: u8,
    /// Review text.
    #[serde(default)]
    pub comment: String,
    /// Reviewer, when the account still exists.
    #[serde(default)]
    pub user: Option<ReviewAuthor>,
    /// Reviewed product, when it still exists.
    #[serde(default)]
    pub product: Option<ReviewProduct>,
    /// The brand's reply, when one was written.
    #[serde(default)]
    pub seller_reply: Option<SellerReply>,
    /// Creation timestamp as sent by the server.
    #[serde(default)]
    pub created_at: String,
}

impl Review {
    /// Whether the brand has written a non-empty reply.
    pub fn has_reply(&self) -> bool {
        self.seller_reply
            .as_ref()
            .is_some_and(|reply| !reply.text.is_empty())
    }
}

/// Reviewer identity embedded in a [`Review`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewAuthor {
    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// Product reference embedded in a [`Review`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewProduct {
    /// Product name.
    #[serde(default)]
    pub name: String,
    /// Owning brand.
    #[serde(default)]
    pub seller: Option<BrandRef>,
}

/// Brand reference embedded in nested records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandRef {
    /// Display name of the brand.
    #[serde(default)]
    pub brand_name: String,
}

/// Brand reply attached to a review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerReply {
    /// Reply text.
    #[serde(default)]
    pub text: String,
}

/// Short product video uploaded by a brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reel {
    /// Record id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Playable video URL.
    #[serde(default)]
    pub video_url: String,
    /// Caption shown under the video.
    #[serde(default)]
    pub caption: String,
    /// Name of the featured product.
    #[serde(default)]
    pub product_name: String,
    /// Id of the featured product.
    #[serde(default)]
    pub product_id: String,
    /// Like count.
    #[serde(default)]
    pub likes: u64,
    /// Uploading brand.
    #[serde(default)]
    pub uploaded_by: Option<BrandRef>,
    /// Creation timestamp as sent by the server.
    #[serde(default)]
    pub created_at: String,
}

/// Support or dispute ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dispute {
    /// Record id.
    #[serde(rename = "_id")]
    pub id: String,
    /// One-line subject.
    #[serde(default)]
    pub subject: String,
    /// Full message body.
    #[serde(default)]
    pub message: String,
    /// Handling status.
    #[serde(default)]
    pub status: DisputeStatus,
    /// Which side opened the ticket.
    #[serde(default)]
    pub from_type: DisputeParty,
    /// Opening account, when it still exists.
    #[serde(rename = "fromId", default)]
    pub from: Option<DisputeContact>,
}

/// Contact details of the account behind a [`Dispute`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeContact {
    /// Contact email.
    #[serde(default)]
    pub email: String,
}

/// Payout details row in the billing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingRecord {
    /// Record id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name of the brand.
    #[serde(default)]
    pub brand_name: String,
    /// Brand logo, when uploaded.
    #[serde(default)]
    pub logo: Option<ImageRef>,
    /// Payout account.
    #[serde(default)]
    pub bank_details: BankDetails,
}

/// Product category tree node (main → sub → sub-sub).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Record id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Category name.
    pub name: String,
    /// Child categories.
    #[serde(default)]
    pub sub_categories: Vec<Category>,
}

// 仪表盘总览统计

/// Aggregated platform metrics behind the overview screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Insights {
    /// Lifetime revenue.
    pub total_revenue: f64,
    /// Lifetime order count.
    pub total_orders: u64,
    /// Listed product count.
    pub total_products: u64,
    /// Registered customer count.
    pub total_customers: u64,
    /// Revenue series.
    pub revenue_data: RevenueData,
    /// Product count per category.
    pub product_distribution_by_category: Vec<CategoryShare>,
    /// Units sold per category.
    pub product_sales_by_category: Vec<CategorySales>,
    /// Best-selling products.
    pub top_selling_products: Vec<TopProduct>,
}

impl Insights {
    /// Average order value; zero when there are no orders yet.
    pub fn average_order_value(&self) -> f64 {
        if self.total_orders == 0 {
            0.0
        } else {
            self.total_revenue / self.total_orders as f64
        }
    }
}

/// Revenue series grouped by period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueData {
    /// One point per month.
    pub monthly: Vec<RevenuePoint>,
}

/// One revenue data point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenuePoint {
    /// Period label, e.g. `2026-07`.
    pub period: String,
    /// Revenue in that period.
    pub amount: f64,
}

/// Product count of one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryShare {
    /// Category name.
    pub category: String,
    /// Listed products in it.
    pub product_count: u64,
}

/// Units sold in one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategorySales {
    /// Category name.
    pub name: String,
    /// Units sold.
    pub value: u64,
}

/// Best-seller row on the overview screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopProduct {
    /// Product name.
    pub name: String,
    /// Owning brand.
    pub brand_name: String,
    /// Units sold.
    pub units_sold: u64,
    /// Revenue attributed to the product.
    pub revenue: f64,
}

// 请求体

/// Email/password pair for login and admin creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Sign-in email.
    pub email: String,
    /// Plain-text password, sent over TLS only.
    pub password: String,
}

/// Partial credential change for the settings screen; exactly one field
/// is set per request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsUpdate {
    /// New email, when changing the email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New password, when changing the password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl CredentialsUpdate {
    /// Change the account email.
    pub fn email(value: &str) -> Self {
        CredentialsUpdate {
            email: Some(value.to_string()),
            password: None,
        }
    }

    /// Change the account password.
    pub fn password(value: &str) -> Self {
        CredentialsUpdate {
            email: None,
            password: Some(value.to_string()),
        }
    }
}

/// Body of a seller rejection; the reason is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectBody {
    /// Why the application was turned down; shown to the applicant.
    pub reason: String,
}

/// Body of a dispute status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeStatusBody {
    /// New handling status.
    pub status: DisputeStatus,
}

/// Body of a category creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    /// Name of the new node.
    pub name: String,
    /// Parent node id; `None` creates a main category.
    pub parent: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seller_decodes_with_sparse_fields() {
        let raw = r#"{"_id":"s1","brandName":"Acme","status":"approved"}"#;
        let seller: Seller = serde_json::from_str(raw).unwrap();
        assert_eq!(seller.id, "s1");
        assert_eq!(seller.brand_name, "Acme");
        assert_eq!(seller.status, SellerStatus::Approved);
        assert_eq!(seller.bank_details, BankDetails::default());
        assert!(seller.logo.is_none());
    }

    #[test]
    fn seller_update_prefills_from_record() {
        let raw = r#"{"_id":"s1","brandName":"Acme","contactNumber":"123","status":"pending"}"#;
        let seller: Seller = serde_json::from_str(raw).unwrap();
        let update = SellerUpdate::from(&seller);
        assert_eq!(update.brand_name, "Acme");
        assert_eq!(update.contact_number, "123");
        assert_eq!(update.status, SellerStatus::Pending);

        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body["brandName"], "Acme");
        assert!(body.get("_id").is_none());
    }

    #[test]
    fn review_reply_presence() {
        let replied: Review =
            serde_json::from_str(r#"{"_id":"r1","sellerReply":{"text":"thanks"}}"#).unwrap();
        let empty_reply: Review =
            serde_json::from_str(r#"{"_id":"r2","sellerReply":{"text":""}}"#).unwrap();
        let none: Review = serde_json::from_str(r#"{"_id":"r3"}"#).unwrap();
        assert!(replied.has_reply());
        assert!(!empty_reply.has_reply());
        assert!(!none.has_reply());
    }

    #[test]
    fn dispute_contact_rides_the_from_id_key() {
        let raw = r#"{"_id":"d1","subject":"s","message":"m","status":"pending",
                      "fromType":"buyer","fromId":{"email":"x@y.z"}}"#;
        let dispute: Dispute = serde_json::from_str(raw).unwrap();
        assert_eq!(dispute.from_type, DisputeParty::Buyer);
        assert_eq!(dispute.from.unwrap().email, "x@y.z");
    }

    #[test]
    fn credentials_update_serializes_one_field() {
        let body = serde_json::to_string(&CredentialsUpdate::email("a@b.c")).unwrap();
        assert_eq!(body, r#"{"email":"a@b.c"}"#);
        let body = serde_json::to_string(&CredentialsUpdate::password("secret")).unwrap();
        assert_eq!(body, r#"{"password":"secret"}"#);
    }

    #[test]
    fn new_main_category_sends_explicit_null_parent() {
        let body = serde_json::to_string(&NewCategory {
            name: "Shoes".to_string(),
            parent: None,
        })
        .unwrap();
        assert_eq!(body, r#"{"name":"Shoes","parent":null}"#);
    }

    #[test]
    fn average_order_value_guards_zero_orders() {
        let mut insights = Insights::default();
        assert_eq!(insights.average_order_value(), 0.0);
        insights.total_revenue = 900.0;
        insights.total_orders = 3;
        assert_eq!(insights.average_order_value(), 300.0);
    }

    #[test]
    fn category_tree_decodes_recursively() {
        let raw = r#"{"_id":"c1","name":"Apparel","subCategories":
                      [{"_id":"c2","name":"Shoes","subCategories":[]}]}"#;
        let node: Category = serde_json::from_str(raw).unwrap();
        assert_eq!(node.sub_categories.len(), 1);
        assert_eq!(node.sub_categories[0].name, "Shoes");
        assert!(node.sub_categories[0].sub_categories.is_empty());
    }
}
