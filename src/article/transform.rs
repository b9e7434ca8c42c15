use chrono::{DateTime, Local, TimeZone};
use tracing::debug;

use super::models::*;
use crate::error::Result;
use crate::format::created_at_at;
use crate::locale::Locale;

/// Turns raw API items into [`Article`]s for one locale and one "now".
#[derive(Debug, Clone)]
pub struct ArticleTransformer<Tz: TimeZone> {
    locale: Locale,
    options: ArticleOptions,
    now: DateTime<Tz>,
}

impl ArticleTransformer<Local> {
    pub fn new(locale: Locale, options: ArticleOptions) -> Self {
        Self::at(locale, options, Local::now())
    }
}

impl<Tz: TimeZone> ArticleTransformer<Tz> {
    pub fn at(locale: Locale, options: ArticleOptions, now: DateTime<Tz>) -> Self {
        Self {
            locale,
            options,
            now,
        }
    }

    pub fn transform(&self, item: &Item) -> Result<Article> {
        let video = item.main_video.as_ref();
        let slug = item.slug_name.as_deref().unwrap_or_default();

        let article = Article {
            photo: self.photo(item),
            video: video.and_then(|v| v.url.clone()),
            duration: video
                .and_then(|v| v.duration.as_ref())
                .and_then(NumberOrText::as_f64),
            title: non_empty(&item.title),
            slug_name: non_empty(&item.slug_name),
            link: format!("{}/{}", self.options.link, slug),
            description: item.description.clone().unwrap_or_default(),
            start_date: self.date(item.start_date.as_deref())?,
            end_date: self.date(item.end_date.as_deref())?,
            category: item
                .category
                .iter()
                .flatten()
                .map(|c| self.category(c))
                .collect(),
            published_date: self.date(item.published_date.as_deref())?,
            message: None,
            visibility: item.view_count,
        };

        debug!(slug, locale = %self.locale, "Transformed item");
        Ok(article)
    }

    pub fn transform_all(&self, items: &[Item]) -> Result<Vec<Article>> {
        items.iter().map(|item| self.transform(item)).collect()
    }

    fn photo(&self, item: &Item) -> Option<String> {
        let base = match non_empty(&item.main_photo) {
            Some(photo) => photo,
            None => {
                let video = item.main_video.as_ref()?;
                non_empty(&video.photo).or_else(|| non_empty(&video.poster))?
            }
        };
        Some(match &self.options.photo_size {
            Some(size) => format!("{base}-{size}.webp"),
            None => format!("{base}.webp"),
        })
    }

    fn date(&self, value: Option<&str>) -> Result<Option<String>> {
        match value.filter(|s| !s.is_empty()) {
            Some(s) => created_at_at(s, self.locale, self.now.clone()).map(Some),
            None => Ok(None),
        }
    }

    fn category(&self, c: &Category) -> ArticleCategory {
        let slug = c.category_slug.as_deref().unwrap_or_default();
        let link = if c.has_parent() {
            let parent = c.parent_category_slug.as_deref().unwrap_or_default();
            format!("{}/{}/{}", self.options.category_link, parent, slug)
        } else {
            format!("{}/{}", self.options.category_link, slug)
        };

        ArticleCategory {
            id: c.category_id,
            category_slug: c.category_slug.clone(),
            parent_category_slug: c.parent_category_slug.clone(),
            parent_id: c.parent_id,
            link,
            name: c.name(self.locale).map(str::to_string),
            parent_name: if c.has_parent() {
                c.parent_name(self.locale).map(str::to_string)
            } else {
                None
            },
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}
