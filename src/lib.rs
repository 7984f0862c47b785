//! Mural, a random wallpaper fetcher.
//!
//! Builds a registry of wallpaper providers from a comma-separated
//! selection string, picks one uniformly at random, resolves it to a
//! concrete image URL, downloads the image, and sets it as the desktop
//! background.
//!
//! # Quick Start
//!
//! ```no_run
//! use mural::source::{http, select, RegistryBuilder};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! # async fn example() -> mural::error::Result<()> {
//! let client = http::shared_client();
//! let providers = RegistryBuilder::default().build("360,bing", client).await?;
//! let mut rng = StdRng::from_os_rng();
//! let provider = select::pick(&providers, &mut rng)?;
//! let url = provider.resolve(client, &mut rng).await?;
//! println!("{url}");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod desktop;
pub mod download;
pub mod error;
pub mod prelude;
pub mod source;
