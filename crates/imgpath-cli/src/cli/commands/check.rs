//! `imgpath check <url>...` – report whether URLs are served locally.

use imgpath_core::StoreLocations;

pub fn run_check(store: &StoreLocations, urls: &[String]) {
    let resolver = store.resolver();
    for url in urls {
        let verdict = if resolver.is_local(url) { "local" } else { "remote" };
        println!("{:<7} {}", verdict, url);
    }
}
