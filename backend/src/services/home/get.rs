use actix_web::{HttpResponse, Responder};
use common::home::{HomeContent, QUOTES};
use rand::seq::SliceRandom;
use rand::Rng;

pub async fn process() -> impl Responder {
    HttpResponse::Ok().json(home_content(&mut rand::thread_rng()))
}

/// Home content with a quote drawn uniformly from [`QUOTES`].
pub fn home_content<R: Rng + ?Sized>(rng: &mut R) -> HomeContent {
    let quote = QUOTES.choose(rng).copied().unwrap_or(QUOTES[0]);
    HomeContent::with_quote(quote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn quote_comes_from_the_fixed_set() {
        let mut rng = StdRng::seed_from_u64(7);
        let content = home_content(&mut rng);
        assert!(QUOTES.contains(&content.quote.as_str()));
        assert_eq!(content.title, common::home::TITLE);
    }

    #[test]
    fn every_quote_is_eventually_drawn() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<String> = (0..500).map(|_| home_content(&mut rng).quote).collect();
        assert_eq!(seen.len(), QUOTES.len());
    }
}
