//! Public read-model composition for the landing page and chrome.
//!
//! The homepage merges the loosely-shaped `home_page` settings document
//! with live entity lookups: UUID-shaped image references resolve against
//! the uploads table, embedded event/news ID arrays resolve via batch
//! lookups (an empty array issues no query), and only active quotes are
//! included. Composition never fails the request: a failed homepage
//! lookup empties the affected section, and a missing header/footer row
//! substitutes a hard-coded document and flags the response.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::warn;
use uuid::Uuid;

use atrium_core::config::ContentConfig;
use atrium_core::result::AppResult;
use atrium_database::repositories::event::EventRepository;
use atrium_database::repositories::post::PostRepository;
use atrium_database::repositories::quote::QuoteRepository;
use atrium_database::repositories::settings::SettingsRepository;
use atrium_database::repositories::upload::UploadRepository;
use atrium_entity::settings::{BannerItem, HomePageDocument, PersonItem};

/// Settings category holding the homepage document.
const HOME_PAGE_CATEGORY: &str = "home_page";
/// Settings categories for the site chrome.
const HEADER_CATEGORY: &str = "header";
const FOOTER_CATEGORY: &str = "footer";

/// The assembled public landing page.
#[derive(Debug, Clone, Serialize)]
pub struct HomePageView {
    /// Hero banners in document order.
    pub banners: Vec<BannerView>,
    /// Board member cards.
    pub board_members: Vec<PersonView>,
    /// Partner logos.
    pub partners: Vec<PersonView>,
    /// Featured events in document order.
    pub events: Vec<EventCard>,
    /// Featured news posts in document order.
    pub news: Vec<NewsCard>,
    /// Active quotes in display order.
    pub quotes: Vec<QuoteView>,
}

/// A resolved banner entry.
#[derive(Debug, Clone, Serialize)]
pub struct BannerView {
    /// Fully-qualified image URL, if the reference resolved.
    pub image_url: Option<String>,
    /// Headline.
    pub title: Option<String>,
    /// Supporting line.
    pub subtitle: Option<String>,
    /// Click-through link.
    pub link: Option<String>,
    /// Ordering; explicit value or array index + 1.
    pub order: i64,
}

/// A resolved board member or partner entry.
#[derive(Debug, Clone, Serialize)]
pub struct PersonView {
    /// Fully-qualified image URL, if the reference resolved.
    pub image_url: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Role title or description.
    pub title: Option<String>,
    /// External link.
    pub link: Option<String>,
    /// Ordering; explicit value or array index + 1.
    pub order: i64,
}

/// A featured event card.
#[derive(Debug, Clone, Serialize)]
pub struct EventCard {
    /// Event ID.
    pub id: Uuid,
    /// URL slug.
    pub slug: String,
    /// Title.
    pub title: String,
    /// Start time.
    pub starts_at: DateTime<Utc>,
    /// End time.
    pub ends_at: Option<DateTime<Utc>>,
    /// Venue.
    pub location: Option<String>,
    /// Resolved cover image URL.
    pub cover_url: Option<String>,
}

/// A featured news card.
#[derive(Debug, Clone, Serialize)]
pub struct NewsCard {
    /// Post ID.
    pub id: Uuid,
    /// URL slug.
    pub slug: String,
    /// Title.
    pub title: String,
    /// Short summary.
    pub excerpt: Option<String>,
    /// Publication time.
    pub published_at: Option<DateTime<Utc>>,
}

/// An active quote.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteView {
    /// Quote text.
    pub text: String,
    /// Attribution.
    pub author: Option<String>,
    /// Display order.
    pub order: i32,
}

/// The site header and footer documents.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderFooterView {
    /// Header document.
    pub header: Value,
    /// Footer document.
    pub footer: Value,
    /// True when either document fell back to the hard-coded default.
    pub is_fallback: bool,
}

/// Assembles public read-models from settings and live entities.
#[derive(Debug, Clone)]
pub struct ContentComposer {
    settings_repo: Arc<SettingsRepository>,
    upload_repo: Arc<UploadRepository>,
    event_repo: Arc<EventRepository>,
    post_repo: Arc<PostRepository>,
    quote_repo: Arc<QuoteRepository>,
    public_base_url: String,
}

impl ContentComposer {
    /// Creates a new composer.
    pub fn new(
        settings_repo: Arc<SettingsRepository>,
        upload_repo: Arc<UploadRepository>,
        event_repo: Arc<EventRepository>,
        post_repo: Arc<PostRepository>,
        quote_repo: Arc<QuoteRepository>,
        content_config: &ContentConfig,
    ) -> Self {
        Self {
            settings_repo,
            upload_repo,
            event_repo,
            post_repo,
            quote_repo,
            public_base_url: content_config.public_base_url.clone(),
        }
    }

    /// Composes the public landing page read-model.
    ///
    /// Never fails: a lookup error degrades the affected section to its
    /// empty default, the same availability bias as the chrome composer.
    pub async fn compose_home_page(&self) -> HomePageView {
        let document = match self.settings_repo.find_by_category(HOME_PAGE_CATEGORY).await {
            Ok(row) => row
                .map(|s| HomePageDocument::from_value(s.document))
                .unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Homepage settings lookup failed, using empty document");
                HomePageDocument::default()
            }
        };

        let event_ids = parse_uuid_refs(&document.events);
        let news_ids = parse_uuid_refs(&document.news);
        let events = or_empty(self.event_repo.find_by_ids(&event_ids).await, "events");
        let posts = or_empty(self.post_repo.find_by_ids(&news_ids).await, "news");

        // One uploads batch covers every image reference: document images
        // plus event covers.
        let mut upload_ids: Vec<Uuid> = Vec::new();
        collect_image_refs(&document, &mut upload_ids);
        upload_ids.extend(events.iter().filter_map(|e| e.cover_upload_id));
        upload_ids.sort_unstable();
        upload_ids.dedup();

        let urls: HashMap<Uuid, String> =
            or_empty(self.upload_repo.find_by_ids(&upload_ids).await, "uploads")
                .into_iter()
                .map(|u| (u.id, u.public_url(&self.public_base_url)))
                .collect();

        let events_by_id: HashMap<Uuid, _> = events.into_iter().map(|e| (e.id, e)).collect();
        let posts_by_id: HashMap<Uuid, _> = posts.into_iter().map(|p| (p.id, p)).collect();

        let quotes = or_empty(self.quote_repo.find_active().await, "quotes")
            .into_iter()
            .map(|q| QuoteView {
                text: q.text,
                author: q.author,
                order: q.display_order,
            })
            .collect();

        HomePageView {
            banners: compose_banners(&document.banners, &urls),
            board_members: compose_people(&document.board_members, &urls),
            partners: compose_people(&document.partners, &urls),
            events: event_ids
                .iter()
                .filter_map(|id| events_by_id.get(id))
                .map(|e| EventCard {
                    id: e.id,
                    slug: e.slug.clone(),
                    title: e.title.clone(),
                    starts_at: e.starts_at,
                    ends_at: e.ends_at,
                    location: e.location.clone(),
                    cover_url: e.cover_upload_id.and_then(|id| urls.get(&id).cloned()),
                })
                .collect(),
            news: news_ids
                .iter()
                .filter_map(|id| posts_by_id.get(id))
                .map(|p| NewsCard {
                    id: p.id,
                    slug: p.slug.clone(),
                    title: p.title.clone(),
                    excerpt: p.excerpt.clone(),
                    published_at: p.published_at,
                })
                .collect(),
            quotes,
        }
    }

    /// Composes the site header and footer.
    ///
    /// Both rows are fetched in parallel. A missing row or a lookup error
    /// substitutes the hard-coded fallback document rather than failing
    /// the request.
    pub async fn compose_header_footer(&self) -> HeaderFooterView {
        let (header, footer) = tokio::join!(
            self.settings_repo.find_by_category(HEADER_CATEGORY),
            self.settings_repo.find_by_category(FOOTER_CATEGORY),
        );

        let mut is_fallback = false;
        let header = resolve_chrome(header, HEADER_CATEGORY, fallback_header(), &mut is_fallback);
        let footer = resolve_chrome(footer, FOOTER_CATEGORY, fallback_footer(), &mut is_fallback);

        HeaderFooterView {
            header,
            footer,
            is_fallback,
        }
    }
}

/// Unwrap a homepage section lookup, degrading to empty on error.
fn or_empty<T>(result: AppResult<Vec<T>>, section: &str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            warn!(section = %section, error = %e, "Homepage lookup failed, section omitted");
            Vec::new()
        }
    }
}

/// Unwrap a chrome lookup, falling back on error or absence.
fn resolve_chrome(
    result: AppResult<Option<atrium_entity::settings::Setting>>,
    category: &str,
    fallback: Value,
    is_fallback: &mut bool,
) -> Value {
    match result {
        Ok(Some(setting)) => setting.document,
        Ok(None) => {
            *is_fallback = true;
            fallback
        }
        Err(e) => {
            warn!(category = %category, error = %e, "Chrome lookup failed, using fallback");
            *is_fallback = true;
            fallback
        }
    }
}

/// Collect the UUID-shaped image references from every document section.
fn collect_image_refs(document: &HomePageDocument, out: &mut Vec<Uuid>) {
    let images = document
        .banners
        .iter()
        .filter_map(|b| b.image.as_deref())
        .chain(document.board_members.iter().filter_map(|p| p.image.as_deref()))
        .chain(document.partners.iter().filter_map(|p| p.image.as_deref()));
    for raw in images {
        if let Ok(id) = Uuid::parse_str(raw.trim()) {
            out.push(id);
        }
    }
}

/// Parse the entries of a reference array that are UUID-shaped, keeping
/// document order.
fn parse_uuid_refs(refs: &[String]) -> Vec<Uuid> {
    refs.iter()
        .filter_map(|r| Uuid::parse_str(r.trim()).ok())
        .collect()
}

/// Resolve an image reference: UUID-shaped strings resolve through the
/// uploads map (unresolvable ones drop to `None`), anything else passes
/// through as a literal URL.
fn resolve_image(raw: Option<&str>, urls: &HashMap<Uuid, String>) -> Option<String> {
    let raw = raw?;
    match Uuid::parse_str(raw.trim()) {
        Ok(id) => urls.get(&id).cloned(),
        Err(_) => Some(raw.to_string()),
    }
}

/// Explicit order, or array index + 1 when absent.
fn resolve_order(explicit: Option<i64>, index: usize) -> i64 {
    explicit.unwrap_or(index as i64 + 1)
}

fn compose_banners(items: &[BannerItem], urls: &HashMap<Uuid, String>) -> Vec<BannerView> {
    items
        .iter()
        .enumerate()
        .map(|(i, b)| BannerView {
            image_url: resolve_image(b.image.as_deref(), urls),
            title: b.title.clone(),
            subtitle: b.subtitle.clone(),
            link: b.link.clone(),
            order: resolve_order(b.order, i),
        })
        .collect()
}

fn compose_people(items: &[PersonItem], urls: &HashMap<Uuid, String>) -> Vec<PersonView> {
    items
        .iter()
        .enumerate()
        .map(|(i, p)| PersonView {
            image_url: resolve_image(p.image.as_deref(), urls),
            name: p.name.clone(),
            title: p.title.clone(),
            link: p.link.clone(),
            order: resolve_order(p.order, i),
        })
        .collect()
}

fn fallback_header() -> Value {
    json!({
        "logo": null,
        "links": [
            { "label": "Home", "href": "/" },
            { "label": "News", "href": "/news" },
            { "label": "Events", "href": "/events" }
        ]
    })
}

fn fallback_footer() -> Value {
    json!({
        "copyright": "Atrium",
        "links": [],
        "social": []
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uuid_refs_keeps_order_and_drops_garbage() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let refs = vec![
            b.to_string(),
            "not-a-uuid".to_string(),
            format!(" {a} "),
        ];
        assert_eq!(parse_uuid_refs(&refs), vec![b, a]);
        assert!(parse_uuid_refs(&[]).is_empty());
    }

    #[test]
    fn test_or_empty_swallows_lookup_errors() {
        let ok: Vec<i32> = or_empty(Ok(vec![1, 2]), "events");
        assert_eq!(ok, vec![1, 2]);
        let failed: Vec<i32> = or_empty(
            Err(atrium_core::error::AppError::database("connection reset")),
            "events",
        );
        assert!(failed.is_empty());
    }

    #[test]
    fn test_resolve_image_variants() {
        let id = Uuid::new_v4();
        let mut urls = HashMap::new();
        urls.insert(id, "http://cdn/img.png".to_string());

        // Resolvable UUID reference.
        assert_eq!(
            resolve_image(Some(&id.to_string()), &urls),
            Some("http://cdn/img.png".to_string())
        );
        // UUID-shaped but unknown: dropped rather than leaked raw.
        assert_eq!(resolve_image(Some(&Uuid::new_v4().to_string()), &urls), None);
        // Literal URL passes through untouched.
        assert_eq!(
            resolve_image(Some("https://example.org/x.png"), &urls),
            Some("https://example.org/x.png".to_string())
        );
        assert_eq!(resolve_image(None, &urls), None);
    }

    #[test]
    fn test_resolve_order_falls_back_to_index_plus_one() {
        assert_eq!(resolve_order(Some(7), 0), 7);
        assert_eq!(resolve_order(None, 0), 1);
        assert_eq!(resolve_order(None, 4), 5);
    }

    #[test]
    fn test_compose_banners_orders_and_resolves() {
        let id = Uuid::new_v4();
        let mut urls = HashMap::new();
        urls.insert(id, "http://cdn/banner.png".to_string());

        let banners = vec![
            BannerItem {
                image: Some(id.to_string()),
                title: Some("First".into()),
                subtitle: None,
                link: None,
                order: None,
            },
            BannerItem {
                image: None,
                title: Some("Second".into()),
                subtitle: None,
                link: None,
                order: Some(10),
            },
        ];
        let views = compose_banners(&banners, &urls);
        assert_eq!(views[0].image_url.as_deref(), Some("http://cdn/banner.png"));
        assert_eq!(views[0].order, 1);
        assert_eq!(views[1].order, 10);
    }
}
