use {
    crate::{
        domain::analytics::{Filter, Table, TransactionFeed},
        views::Transactions,
    },
    chrono::DateTime,
    serde_json::json,
};

fn swap(id: &str, timestamp: i64) -> serde_json::Value {
    json!({
        "transaction": { "id": id, "timestamp": timestamp.to_string() },
        "pair": { "token0": { "symbol": "ETH" }, "token1": { "symbol": "PBR" } },
        "sender": "0xabcdefabcdefabcdefabcdefabcdefabcdef12345",
        "amountUSD": "10",
        "amount0In": "1",
        "amount1In": "0",
        "amount0Out": "0",
        "amount1Out": "20",
    })
}

#[test]
fn last_page_of_swaps() {
    let feed: TransactionFeed = serde_json::from_value(json!({
        "swaps": (0..7).map(|i| swap(&format!("s{i}"), 1000 + i)).collect::<Vec<_>>(),
    }))
    .unwrap();
    let mut table = Table::new(feed);
    table.set_filter(Filter::Swap);
    table.go_to(1);

    let now = DateTime::from_timestamp(1010, 0).unwrap();
    let view = Transactions::new(&table, now);
    assert_eq!(view.page, 2);
    assert_eq!(view.page_count, 2);
    assert_eq!(view.filter, "swap");
    assert_eq!(view.headers, ["Token(In)", "Token(Out)"]);
    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.rows[0].number, 6);
    assert_eq!(view.rows[1].description, "Swap ETH for PBR");
    assert_eq!(view.rows[1].time, "10 secs ago");
    assert_eq!(view.rows[1].account, "0xa ... 12345");
}
