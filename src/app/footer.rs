use leptos::prelude::*;

use crate::content::build_year;

#[component]
pub fn Footer(name: String, tagline: String) -> impl IntoView {
    let copyright = match build_year() {
        Some(year) => format!("© {year} All rights reserved"),
        None => "All rights reserved".to_string(),
    };

    view! {
        <footer class="py-12 px-6 border-t border-border/50">
            <div class="container mx-auto">
                <div class="flex flex-col md:flex-row items-center justify-between gap-4 animate-fade-in">
                    <span class="font-heading text-lg font-semibold text-foreground">{name}</span>
                    <p class="font-body text-sm text-muted-foreground">{copyright}</p>
                    <p class="font-body text-sm text-muted-foreground/60">{tagline}</p>
                </div>
            </div>
        </footer>
    }
}
