use log::{debug, info};
use regex::Regex;
use ::scraper::{ElementRef, Html, Selector};
use serde_json::Value;

use crate::errors::CrawlError;
use crate::models::baidu_board_response::{BaiduBoardResponse, Card, Content};
use crate::models::hot_search_entry::{non_empty, HotScore, HotSearchEntry};

const DATA_BLOCK_PATTERN: &str = r"(?s)<!--s-data:(.*?)-->";
const HOT_LIST_COMPONENT: &str = "hotList";

const CARD_SELECTOR: &str = "div.category-wrap_iQLoo";
const RANK_SELECTOR: &str = "div.index_1Ew5p";
const TITLE_SELECTOR: &str = "div.c-single-text-ellipsis";
const SUMMARY_SELECTOR: &str = "div.hot-desc_1m_jR";
const HOT_SCORE_SELECTOR: &str = "div.hot-index_1Bl1a";
const DETAIL_LINK_SELECTOR: &str = "a.c-single-text-ellipsis";

/// Extracts the ranked board from a realtime hot search page.
///
/// The embedded `s-data` JSON block is preferred; the rendered cards are
/// only consulted when the page carries no such block. Anything else is a
/// parse error, the page layout is not guessed at.
pub fn parse_hot_search(html: &str) -> Result<Vec<HotSearchEntry>, CrawlError> {
    let items = match find_data_block(html) {
        Some(data_block) => {
            debug!("Found s-data block ({} bytes)", data_block.len());
            parse_data_block(data_block)?
        }
        None => {
            debug!("No s-data block, falling back to {}", CARD_SELECTOR);
            parse_cards(html)?
        }
    };

    if items.is_empty() {
        return Err(CrawlError::Parse(
            "No hot search items were found".to_string(),
        ));
    }

    ensure_increasing_ranks(&items)?;

    info!("Extracted {} hot search items", items.len());

    Ok(items)
}

fn find_data_block(html: &str) -> Option<&str> {
    let regex = Regex::new(DATA_BLOCK_PATTERN).unwrap();

    regex
        .captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

fn parse_data_block(data_block: &str) -> Result<Vec<HotSearchEntry>, CrawlError> {
    let board = serde_json::from_str::<BaiduBoardResponse>(data_block)
        .map_err(|err| CrawlError::Parse(format!("malformed s-data block: {}", err)))?;

    let card = select_hot_list(&board.data.cards)?;

    let items = card
        .content
        .iter()
        .enumerate()
        .map(|(position, content)| build_entry_from_content(position as u32 + 1, content))
        .collect();

    Ok(items)
}

/// The `hotList` card, or the first card when no card is tagged at all.
fn select_hot_list(cards: &[Card]) -> Result<&Card, CrawlError> {
    if let Some(card) = cards.iter().find(|card| card.component == HOT_LIST_COMPONENT) {
        return Ok(card);
    }

    if cards.iter().all(|card| card.component.is_empty()) {
        return cards.first().ok_or_else(|| {
            CrawlError::Parse("s-data block contains no data.cards entries".to_string())
        });
    }

    Err(CrawlError::Parse(format!(
        "s-data block has no {} card",
        HOT_LIST_COMPONENT
    )))
}

fn build_entry_from_content(rank: u32, content: &Content) -> HotSearchEntry {
    let title = non_empty(&content.word)
        .or_else(|| content.query.as_deref().and_then(non_empty))
        .unwrap_or_default();

    let detail_url = content
        .url
        .as_deref()
        .and_then(non_empty)
        .or_else(|| content.raw_url.as_deref().and_then(non_empty));

    HotSearchEntry {
        rank,
        title,
        summary: content.desc.as_deref().and_then(non_empty),
        hot_score: content.hot_score.as_ref().and_then(score_from_value),
        detail_url,
    }
}

fn score_from_value(value: &Value) -> Option<HotScore> {
    match value {
        Value::String(raw) => HotScore::parse(raw),
        Value::Number(number) => match number.as_u64() {
            Some(score) => Some(HotScore::Number(score)),
            None => Some(HotScore::Text(number.to_string())),
        },
        _ => None,
    }
}

fn parse_cards(html: &str) -> Result<Vec<HotSearchEntry>, CrawlError> {
    let document = Html::parse_document(html);

    let card_selector = selector(CARD_SELECTOR);
    let rank_selector = selector(RANK_SELECTOR);
    let title_selector = selector(TITLE_SELECTOR);
    let summary_selector = selector(SUMMARY_SELECTOR);
    let hot_score_selector = selector(HOT_SCORE_SELECTOR);
    let detail_link_selector = selector(DETAIL_LINK_SELECTOR);

    let cards = document.select(&card_selector).collect::<Vec<_>>();
    if cards.is_empty() {
        return Err(CrawlError::Parse(format!(
            "neither an s-data block nor {} cards were found",
            CARD_SELECTOR
        )));
    }

    let mut items = vec![];

    for card in cards {
        let rank = match first_text(&card, &rank_selector).and_then(|r| r.parse::<u32>().ok()) {
            Some(rank) => rank,
            None => {
                // pinned and promoted cards carry no numeric rank
                debug!("Skipping card without a numeric rank");
                continue;
            }
        };

        let detail_url = card
            .select(&detail_link_selector)
            .next()
            .and_then(|link| link.value().attr("href"))
            .and_then(non_empty);

        items.push(HotSearchEntry {
            rank,
            title: first_text(&card, &title_selector).unwrap_or_default(),
            summary: first_text(&card, &summary_selector),
            hot_score: first_text(&card, &hot_score_selector)
                .and_then(|raw| HotScore::parse(&raw)),
            detail_url,
        });
    }

    // DOM order is not reliable once ads are injected
    items.sort_by_key(|item| item.rank);

    Ok(items)
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

fn first_text(element: &ElementRef, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .and_then(|node| non_empty(&node.text().collect::<String>()))
}

/// Ranks must start at 1 and strictly increase.
fn ensure_increasing_ranks(items: &[HotSearchEntry]) -> Result<(), CrawlError> {
    if let Some(first) = items.first() {
        if first.rank != 1 {
            return Err(CrawlError::Parse(format!(
                "hot search list starts at rank {} instead of 1",
                first.rank
            )));
        }
    }

    for pair in items.windows(2) {
        if pair[1].rank == pair[0].rank {
            return Err(CrawlError::Parse(format!(
                "duplicate rank {} in hot search list",
                pair[1].rank
            )));
        }

        if pair[1].rank < pair[0].rank {
            return Err(CrawlError::Parse(format!(
                "rank {} follows rank {} in hot search list",
                pair[1].rank, pair[0].rank
            )));
        }
    }

    Ok(())
}
