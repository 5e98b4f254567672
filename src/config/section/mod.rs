//! Configuration section definitions.
//!
//! Each module corresponds to a section in `biblia.toml`:
//!
//! | Module   | TOML Section | Purpose                          |
//! |----------|--------------|----------------------------------|
//! | `site`   | `[site]`     | Title, public URL                |
//! | `build`  | `[build]`    | Bundler output, SPA shell        |
//! | `deploy` | `[deploy]`   | Subpath for subdirectory hosting |
//! | `serve`  | `[serve]`    | Development server               |

mod build;
mod deploy;
mod serve;
mod site;

pub use build::BuildConfig;
pub use deploy::DeployConfig;
pub use serve::ServeConfig;
pub use site::SiteSectionConfig;
