use std::io::Write as _;
use std::time::Duration;

use chrono::{DateTime, Utc};
use estate_concierge::assistant::{
    manual_fallback_message, promoted_catalog, resolve_booking_target, AssistantSession,
    CatalogEntry,
};
use estate_concierge::forms::{BookingForm, VisitForm};
use estate_concierge::gateway::{EstateGateway, ListingSource, RemoteError};
use estate_concierge::models::{Booking, Property, SiteVisit, UserSession};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Vision Estate Concierge");
    info!("==========================");
    info!("");

    let gateway = EstateGateway::new()?;
    info!("Backend: {} ({})", gateway.base_url(), gateway.source_name());

    let account = UserSession::from_env();
    match &account {
        Some(user) => info!("Signed in as {}", user.email),
        None => info!("Browsing as guest, bookings will ask for name and email"),
    }

    // One snapshot up front; the booking commands resolve ids against it.
    let properties = match gateway.list_properties().await {
        Ok(list) => {
            info!("Loaded {} properties from the backend", list.len());
            list
        }
        Err(err) => {
            warn!("Could not load properties: {}", err);
            Vec::new()
        }
    };

    let mut chat = AssistantSession::new(promoted_catalog());
    if let Some(opening) = chat.messages().first() {
        println!("🤖 {}", opening.text);
    }

    println!();
    println!("Ask about a project, or use:");
    println!("  visit <rfc3339-time> [name email]   schedule a site visit for the shown project");
    println!("  reserve <amount> [name email]       book it with an initial payment");
    println!("  quit                                leave");
    println!();

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        if let Some(args) = line.strip_prefix("visit ") {
            handle_visit(&gateway, account.as_ref(), &chat, &properties, args).await;
            continue;
        }
        if let Some(args) = line.strip_prefix("reserve ") {
            handle_reserve(&gateway, account.as_ref(), &chat, &properties, args).await;
            continue;
        }

        // Small pause so replies read like the assistant is typing.
        tokio::time::sleep(Duration::from_millis(600)).await;
        let answer = chat.respond(line);
        println!("🤖 {}", answer.text);
        if let Some(card) = &answer.card {
            print_card(card);
        }
    }

    info!("👋 Closed with {} messages on the transcript", chat.messages().len());

    Ok(())
}

async fn handle_visit(
    gateway: &EstateGateway,
    account: Option<&UserSession>,
    chat: &AssistantSession,
    properties: &[Property],
    args: &str,
) {
    let target = match booking_target(chat, properties) {
        Some(target) => target,
        None => return,
    };

    let mut parts = args.split_whitespace();
    let visit_date: DateTime<Utc> = match parts.next().map(str::parse) {
        Some(Ok(date)) => date,
        _ => {
            println!("⚠️  Give the visit time as RFC 3339, e.g. 2026-09-01T10:30:00Z");
            return;
        }
    };
    let form = VisitForm {
        name: parts.next().unwrap_or_default().to_string(),
        email: parts.next().unwrap_or_default().to_string(),
        visit_date,
    };

    match schedule_visit(gateway, account, &target.id, form).await {
        Ok(visit) => {
            println!("✅ Visit Scheduled! Our team will contact you shortly.");
            info!("Visit {} for {} on {}", visit.id, target.title, visit.visit_date);
        }
        Err(err) => println!("❌ {}", err),
    }
}

async fn handle_reserve(
    gateway: &EstateGateway,
    account: Option<&UserSession>,
    chat: &AssistantSession,
    properties: &[Property],
    args: &str,
) {
    let target = match booking_target(chat, properties) {
        Some(target) => target,
        None => return,
    };

    let mut parts = args.split_whitespace();
    let amount = match parts.next() {
        Some(raw) => raw.to_string(),
        None => {
            println!("⚠️  Give the initial payment amount, e.g. reserve 50000");
            return;
        }
    };
    let form = BookingForm {
        name: parts.next().unwrap_or_default().to_string(),
        email: parts.next().unwrap_or_default().to_string(),
        initial_payment: amount,
    };

    match place_booking(gateway, account, &target.id, form).await {
        Ok(booking) => {
            println!("✅ Booking confirmed! ID: {}", booking.id);
            info!("Booking {} for {} ({})", booking.id, target.title, booking.status);
        }
        Err(err) => println!("❌ {}", err),
    }
}

/// The backend property behind the card the assistant last presented.
/// Prints the reason and returns `None` when there is nothing to book.
fn booking_target<'a>(
    chat: &AssistantSession,
    properties: &'a [Property],
) -> Option<&'a Property> {
    let card = match chat.presented_card() {
        Some(card) => card,
        None => {
            println!("⚠️  Ask about a project first, then book it.");
            return None;
        }
    };

    match resolve_booking_target(card, properties) {
        Some(property) => Some(property),
        None => {
            println!("⚠️  {}", manual_fallback_message(card));
            None
        }
    }
}

async fn schedule_visit(
    gateway: &EstateGateway,
    account: Option<&UserSession>,
    property_id: &str,
    form: VisitForm,
) -> Result<SiteVisit, RemoteError> {
    let payload = form.into_request(account, property_id)?;
    gateway.create_site_visit(&payload).await
}

async fn place_booking(
    gateway: &EstateGateway,
    account: Option<&UserSession>,
    property_id: &str,
    form: BookingForm,
) -> Result<Booking, RemoteError> {
    let payload = form.into_request(account, property_id)?;
    gateway.create_booking(&payload).await
}

fn print_card(card: &CatalogEntry) {
    println!("   📍 {} | {} | {}", card.location, card.price_label, card.config);
    println!("   🌱 Eco score {}/100", card.eco_score);
    println!("   {}", card.rationale);
}
