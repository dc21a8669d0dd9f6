// Transport failure contract: every call against an unreachable server
// resolves to a failure record instead of an error or panic.

use posprint::{LabelBuilder, LabelClient, ReceiptBuilder, ReceiptClient};

// Nothing listens on this port in the test environment.
const DEAD_URL: &str = "http://127.0.0.1:59123";

#[tokio::test]
async fn receipt_calls_never_error() {
    let client = ReceiptClient::new(DEAD_URL);

    let mut builder = ReceiptBuilder::new();
    builder.text("unreachable");
    let outcome = client.print(builder).await;
    assert!(!outcome.success);
    assert!(!outcome.message.is_empty());

    let outcome = client.print_commands(&[]).await;
    assert!(!outcome.success);
    assert!(!outcome.message.is_empty());

    let list = client.printers().await;
    assert!(!list.success);
    assert!(list.printers.is_empty());

    let selected = client.select_printer("EPSON TM-T20").await;
    assert!(!selected.success);
    assert!(!selected.message.is_empty());
    assert!(selected.printer.is_none());

    let current = client.selected_printer().await;
    assert!(!current.success);
    assert!(!current.message.is_empty());
}

#[tokio::test]
async fn label_calls_never_error() {
    let client = LabelClient::new(DEAD_URL);

    let outcome = client.print(LabelBuilder::default()).await;
    assert!(!outcome.success);
    assert!(!outcome.message.is_empty());

    let outcome = client.print_zpl("^XA^XZ", Some("Zebra"), 2).await;
    assert!(!outcome.success);
    assert!(!outcome.message.is_empty());

    let outcome = client.print_raw("AAAA", None, 1).await;
    assert!(!outcome.success);
    assert!(!outcome.message.is_empty());

    let list = client.printers().await;
    assert!(!list.success);
    assert!(list.printers.is_empty());

    let selected = client.selected_printer().await;
    assert!(!selected.success);
    assert!(selected.printer.is_none());
}

#[tokio::test]
async fn build_failure_is_caught_at_the_print_boundary() {
    let client = LabelClient::new(DEAD_URL);

    let mut builder = LabelBuilder::default();
    builder.image("/nonexistent/logo.png", 0, 0, 50, 50);

    // The image failure is converted to a failure outcome before any
    // request is attempted.
    let outcome = client.print(builder).await;
    assert!(!outcome.success);
    assert!(!outcome.message.is_empty());
}
