//! This file defines the templates and a convenience function for creating the navigation bar.

use maud::{Markup, html};

use crate::endpoints;

/// Template for a link in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    icon: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_desktop_html(self) -> Markup {
        let style = if self.is_current {
            "flex items-center gap-2 py-2 px-3 rounded-sm text-emerald-600 \
            dark:text-emerald-400 font-semibold"
        } else {
            "flex items-center gap-2 py-2 px-3 rounded-sm text-gray-700 \
            hover:text-emerald-600 dark:text-neutral-300 dark:hover:text-emerald-400"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                span class="material-symbols-outlined" { (self.icon) }
                (self.title)
            }
        )
    }

    fn into_mobile_html(self) -> Markup {
        let style = if self.is_current {
            "flex w-full items-center justify-center gap-1 rounded-lg px-2.5 py-2 \
            text-xs font-semibold bg-emerald-50 text-emerald-700 \
            dark:bg-emerald-900/30 dark:text-emerald-200"
        } else {
            "flex w-full items-center justify-center gap-1 rounded-lg px-2.5 py-2 \
            text-xs font-semibold text-gray-600 hover:text-emerald-700 \
            dark:text-neutral-300 dark:hover:text-emerald-200"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                span class="material-symbols-outlined text-[18px]" { (self.icon) }
                span class="truncate" { (self.title) }
            }
        )
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> NavBar<'_> {
        let links = vec![
            Link {
                url: endpoints::ENTRY_VIEW,
                title: "Record",
                icon: "edit_note",
                is_current: active_endpoint == endpoints::ENTRY_VIEW,
            },
            Link {
                url: endpoints::REPORT_VIEW,
                title: "Report",
                icon: "table_view",
                is_current: active_endpoint == endpoints::REPORT_VIEW,
            },
        ];

        NavBar { links }
    }

    pub fn into_html(self) -> Markup {
        let links = self.links;

        html!(
            nav class="bg-white border-b border-gray-200 dark:bg-neutral-950 dark:border-neutral-800"
            {
                div
                    class="max-w-[1440px] flex flex-wrap items-center justify-between mx-auto p-4"
                {
                    a
                        href="/"
                        class="flex items-center gap-2"
                    {
                        span class="material-symbols-outlined text-emerald-500" { "account_balance_wallet" }

                        span
                            class="self-center text-2xl font-semibold whitespace-nowrap dark:text-white"
                        {
                            "Ledgerlet"
                        }
                    }

                    div class="hidden w-full lg:block lg:w-auto"
                    {
                        ul class="font-medium flex flex-row gap-6"
                        {
                            @for link in links.clone().into_iter() {
                                li { (link.into_desktop_html()) }
                            }
                        }
                    }
                }
            }

            nav class="fixed inset-x-0 bottom-0 z-40 lg:hidden"
            {
                div class="mx-auto max-w-screen-xl px-4 pb-4"
                {
                    ul
                        class="grid grid-cols-2 gap-2 px-4 py-3 rounded-xl border
                        border-gray-200 bg-white/95 shadow-lg backdrop-blur
                        dark:border-neutral-700 dark:bg-neutral-900/95"
                        aria-label="Primary"
                    {
                        @for link in links.into_iter() {
                            li class="min-w-0" { (link.into_mobile_html()) }
                        }
                    }
                }
            }
        )
    }
}

#[cfg(test)]
mod nav_bar_tests {
    use std::collections::HashMap;

    use crate::{endpoints, navigation::NavBar};

    #[test]
    fn set_active_endpoint() {
        let mut cases = HashMap::new();
        cases.insert(endpoints::ENTRY_VIEW, true);
        cases.insert(endpoints::REPORT_VIEW, true);

        cases.insert(endpoints::ROOT, false);
        cases.insert(endpoints::INTERNAL_ERROR_VIEW, false);
        cases.insert(endpoints::TRANSACTIONS_API, false);
        cases.insert(endpoints::DRAFT_API, false);

        for (endpoint, should_be_active) in cases {
            let nav_bar = NavBar::new(endpoint);

            assert_link_active(nav_bar, endpoint, should_be_active);
        }
    }

    #[track_caller]
    fn assert_link_active(nav_bar: NavBar<'_>, endpoint: &str, should_be_active: bool) {
        let get_active_string = |is_active: bool| -> &str {
            if is_active {
                "active (true)"
            } else {
                "inactive (false)"
            }
        };

        for link in nav_bar.links {
            if link.url == endpoint {
                assert_eq!(
                    link.is_current,
                    should_be_active,
                    "Link for current page should be {} but got {}",
                    get_active_string(should_be_active),
                    get_active_string(link.is_current),
                )
            } else {
                assert!(
                    !link.is_current,
                    "Link for inactive page should {} but got {}",
                    get_active_string(false),
                    get_active_string(link.is_current)
                )
            }
        }
    }
}
