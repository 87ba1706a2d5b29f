use maud::{DOCTYPE, Markup, html};

use crate::{entities::movie, models::Candidate};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn index_page(movies: &[movie::Model]) -> String {
    page(
        "My Top Movies",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Top Movies" }
                            p class="mt-2 text-gray-600" { "Ranked from lowest to highest rating." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/add" { "Add movie" }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "Nothing here yet. Add a movie to start your list." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for movie in movies {
                                (movie_card(movie))
                            }
                        }
                    }
                }
            }
        },
    )
}

fn movie_card(movie: &movie::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg overflow-hidden md:flex" {
            img class="h-48 w-full object-cover md:h-auto md:w-56" src=(movie.img_url) alt=(movie.title);
            div class="p-6 flex-1" {
                div class="flex items-start justify-between gap-4" {
                    h2 class="text-xl font-semibold text-gray-900" {
                        (movie.title)
                        span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                    }
                    span class="text-lg font-bold text-blue-600" { (format_rating(movie.rating)) }
                }
                p class="mt-2 text-sm text-gray-600" { (movie.description) }
                @if let Some(review) = non_blank(movie.review.as_deref()) {
                    p class="mt-3 text-sm italic text-gray-700" { "“" (review) "”" }
                }
                div class="mt-4 flex gap-4 text-sm" {
                    a class="text-blue-600 hover:text-blue-800" href=(format!("/edit/{}", movie.id)) { "Edit" }
                    a class="text-red-600 hover:text-red-800" href=(format!("/delete?id={}", movie.id)) { "Delete" }
                }
            }
        }
    }
}

pub fn edit_page(movie: &movie::Model, error: Option<&str>) -> String {
    let current = movie.rating.unwrap_or(0.0).round() as i64;

    page(
        "Rate Movie",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { (movie.title) }
                        p class="mt-1 text-sm text-gray-500" { (movie.year) }

                        @if let Some(msg) = error {
                            (error_banner(msg))
                        }

                        form class="mt-6 space-y-6" method="post" action=(format!("/edit/{}", movie.id)) {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="rating" { "Your rating" }
                                select class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="rating" id="rating" required {
                                    @for n in 0..=10i64 {
                                        option value=(n) selected[n == current] { (n) }
                                    }
                                }
                            }

                            div {
                                label class="block text-sm font-medium text-gray-700" for="review" { "Your review" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="review" id="review" value=(movie.review.as_deref().unwrap_or("").trim());
                            }

                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Save" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

pub fn add_page(error: Option<&str>) -> String {
    page(
        "Add Movie",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Add a movie" }
                        p class="mt-2 text-gray-600" { "Search the movie database by title." }

                        @if let Some(msg) = error {
                            (error_banner(msg))
                        }

                        form class="mt-6 space-y-6" method="post" action="/add" {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="title" { "Movie title" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="title" id="title" required;
                            }
                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Search" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

pub fn select_page(query: &str, candidates: &[Candidate]) -> String {
    page(
        "Select Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    h1 class="text-2xl font-bold text-gray-900" { "Results for “" (query) "”" }

                    @if candidates.is_empty() {
                        div class="mt-8 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No matches found." }
                            a class="mt-4 inline-block text-blue-600 hover:text-blue-800" href="/add" { "Try another title" }
                        }
                    } @else {
                        ul class="mt-8 space-y-3" {
                            @for candidate in candidates {
                                li {
                                    a class="block bg-white shadow rounded-lg p-5 hover:bg-blue-50" href=(format!("/movie/{}", candidate.id)) {
                                        span class="font-semibold text-gray-900" { (candidate.title) }
                                        @if let Some(date) = &candidate.release_date {
                                            span class="ml-2 text-sm text-gray-500" { "(" (date) ")" }
                                        }
                                        @if let Some(overview) = &candidate.overview {
                                            p class="mt-1 text-sm text-gray-600 line-clamp-2" { (overview) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn error_banner(message: &str) -> Markup {
    html! {
        div class="mt-4 rounded-md border border-red-300 bg-red-50 px-4 py-3 text-sm text-red-700" {
            (message)
        }
    }
}

fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{:.0}/10", r),
        None => "—".to_string(),
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}
