// SPDX-License-Identifier: GPL-3.0-only

pub mod catalog;

pub use catalog::Catalog;

pub enum Screen {
    Welcome,
    Catalog(Catalog),
}
