use leptos::prelude::*;

use crate::{content::NavItem, motion::is_scrolled};

use super::hooks::use_scroll_offset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Toggle,
    SelectItem,
}

/// Mobile menu state after `action`; picking an item always closes it.
fn next_menu_state(open: bool, action: MenuAction) -> bool {
    match action {
        MenuAction::Toggle => !open,
        MenuAction::SelectItem => false,
    }
}

const HEADER_BASE: &str = "fixed top-0 left-0 right-0 z-50 transition-all duration-300 animate-header-drop";

#[component]
pub fn Navigation(brand: String, items: Vec<NavItem>) -> impl IntoView {
    let offset = use_scroll_offset();
    let scrolled = Memo::new(move |_| is_scrolled(offset.get()));
    let (menu_open, set_menu_open) = signal(false);

    let header_class = move || {
        if scrolled.get() {
            format!("{HEADER_BASE} bg-background/80 backdrop-blur-xl border-b border-border/50 shadow-soft")
        } else {
            format!("{HEADER_BASE} bg-transparent")
        }
    };

    let desktop_links = items
        .iter()
        .map(|item| {
            view! {
                <a
                    href=item.href.clone()
                    data-nav-link="desktop"
                    class="px-4 py-2 font-body text-sm text-muted-foreground hover:text-foreground hover:bg-primary/5 rounded-lg transition-all"
                >
                    {item.label.clone()}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class=header_class data-scrolled=move || scrolled.get().to_string()>
            <nav class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <a href="#" class="flex items-center gap-2 group">
                        <div class="w-10 h-10 bg-primary/10 border border-primary/20 rounded-xl flex items-center justify-center group-hover:bg-primary/20 transition-colors">
                            <i class="extra-database text-primary"></i>
                        </div>
                        <span class="font-heading text-xl font-bold text-foreground hidden sm:block">
                            {brand}
                        </span>
                    </a>
                    <div class="hidden md:flex items-center gap-1">{desktop_links}</div>
                    <button
                        class="md:hidden p-2 text-foreground hover:text-primary transition-colors"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = next_menu_state(*open, MenuAction::Toggle))
                    >
                        <i class=move || {
                            if menu_open.get() { "extra-close text-2xl" } else { "extra-menu text-2xl" }
                        }></i>
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <div class="md:hidden mt-4 pb-4 border-t border-border/50 animate-fade-in">
                        <div class="flex flex-col gap-2 pt-4">
                            {items
                                .iter()
                                .map(|item| {
                                    view! {
                                        <a
                                            href=item.href.clone()
                                            on:click=move |_| set_menu_open.update(|open| *open = next_menu_state(*open, MenuAction::SelectItem))
                                            class="px-4 py-3 font-body text-foreground hover:text-primary hover:bg-primary/5 rounded-xl transition-all"
                                        >
                                            {item.label.clone()}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>
            </nav>
        </header>
    }
}
