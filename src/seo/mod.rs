//! Page metadata: resolution, head rendering, and presentation.
//!
//! | Module    | Purpose                                              |
//! |-----------|------------------------------------------------------|
//! | `bundle`  | `MetadataBundle`, the resolved output                |
//! | `og`      | Open Graph / Twitter card types and site defaults    |
//! | `resolve` | Slug + lookup → bundle, including NotFound fallback  |
//! | `head`    | Bundle → `<title>` / `<meta>` / `<link>` tags        |
//! | `apply`   | Side-effecting step onto a page or fragment          |

mod apply;
mod bundle;
mod head;
mod og;
mod resolve;

pub use apply::{ApplyError, HeadFragment, HtmlPage, Presentation, apply};
pub use bundle::{AuthorLink, MetadataBundle};
pub use head::{HeadTag, LinkTag, MetaKey, MetaTag, render_head, to_html};
pub use og::{OgDefaults, OgImage, OgType, OpenGraph, SocialCard};
pub use resolve::{Resolver, from_record, not_found};
