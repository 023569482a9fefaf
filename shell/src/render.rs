use std::fmt::Write;
use tender_core::session::{CartSnapshot, CheckoutReceipt, PurchaseReceipt, RankedResults, TenderSummary};
use tender_core::{Amount, ScoredOffer};

/// `Rp 15,000`
pub fn price(amount: impl Into<Amount>) -> String {
    let digits = amount.into().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    out.push_str("Rp ");
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn card(number: usize, offer: &ScoredOffer) -> String {
    let p = &offer.product;
    let mut s = String::new();
    let _ = writeln!(s, "[{number}] {:<28} * {:.1}", p.seller, p.rating);
    let _ = writeln!(s, "    {}", p.item);
    let _ = write!(
        s,
        "    {}  |  {} min  |  delivery {}  |  score {}",
        price(p.price),
        p.delivery_minutes,
        p.delivery,
        offer.score
    );
    s
}

pub fn results(results: &RankedResults) -> String {
    let mut s = String::new();
    let flags: Vec<&str> = results.criteria.iter().map(|c| c.as_str()).collect();
    let _ = writeln!(
        s,
        "tender #{} \"{}\"  category: {}  criteria: {}",
        results.tender_id,
        results.query,
        results.category,
        if flags.is_empty() { "none".to_string() } else { flags.join(", ") }
    );
    if results.results.is_empty() {
        s.push_str("no offers yet for this category");
        return s;
    }
    let cards: Vec<String> = results.results.iter().enumerate().map(|(i, o)| card(i + 1, o)).collect();
    s.push_str(&cards.join("\n"));
    if results.total_candidates > results.results.len() {
        let _ = write!(s, "\n({} of {} offers shown)", results.results.len(), results.total_candidates);
    }
    s
}

pub fn cart(cart: &CartSnapshot) -> String {
    if cart.lines.is_empty() {
        return "your cart is empty".to_string();
    }
    let mut s = String::new();
    for (i, line) in cart.lines.iter().enumerate() {
        let _ = writeln!(s, "{}. {}  qty {}  {}", i + 1, line.item, line.quantity, price(line.total));
    }
    let _ = write!(s, "total: {}  ({} items)", price(cart.total), cart.count);
    s
}

pub fn checkout(receipt: &CheckoutReceipt) -> String {
    format!(
        "checkout complete\n  total payment: {}\n  items: {}",
        price(receipt.total),
        receipt.item_count
    )
}

pub fn purchase(receipt: &PurchaseReceipt) -> String {
    format!(
        "purchase complete\n  product: {}\n  seller: {}\n  price: {}\n  delivery: {} min ({})",
        receipt.item,
        receipt.seller,
        price(receipt.price),
        receipt.delivery_minutes,
        receipt.delivery
    )
}

pub fn history(history: &[TenderSummary]) -> String {
    if history.is_empty() {
        return "no searches yet".to_string();
    }
    history
        .iter()
        .map(|t| format!("#{} {} [{}] \"{}\" -> {} offers", t.id, t.time, t.category, t.request, t.result_count))
        .collect::<Vec<_>>()
        .join("\n")
}
