//! Example payment request flow.
//!
//! This example builds a payment request from JSON fixtures in W3C member
//! spelling, walks it through the interactive phase, and settles it with the
//! auto presenter: once accepting, once failing like a sheet that found no
//! matching payment method.
//!
//! Run with:
//! ```bash
//! cargo run --example show
//! ```

use payment_request_rs::{
    present::auto::AutoPresenter, registry::RequestRegistry, PaymentAddress, PaymentDetailsInit,
    PaymentMethodData, PaymentOptions, PaymentRequest, PaymentRequestError,
};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let method_data: Vec<PaymentMethodData> = serde_json::from_value(json!([
        {
            "supportedMethods": ["basic-card"],
            "data": {"supportedNetworks": ["visa", "amex"]}
        }
    ]))?;
    let details: PaymentDetailsInit = serde_json::from_value(json!({
        "id": "demo-order",
        "total": {"label": "Total", "amount": {"currency": "USD", "value": "55.00"}},
        "displayItems": [
            {"label": "Subtotal", "amount": {"currency": "USD", "value": "60.00"}},
            {"label": "Discount", "amount": {"currency": "USD", "value": "-5.00"}}
        ],
        "shippingOptions": [
            {"id": "standard", "label": "Standard (5 days)", "amount": {"currency": "USD", "value": "0.00"}, "selected": true},
            {"id": "express", "label": "Express (1 day)", "amount": {"currency": "USD", "value": "10.00"}}
        ]
    }))?;
    let options: PaymentOptions = serde_json::from_value(json!({
        "requestShipping": true,
        "shippingType": "delivery"
    }))?;

    let registry = RequestRegistry::new();

    let mut request = PaymentRequest::new(&method_data, Some(&details), Some(&options))?;
    registry.register(request.record().clone()).await?;

    println!("request {} created", request.id());
    println!("  shipping type: {:?}", request.shipping_type());
    println!("  pre-selected option: {:?}", request.shipping_option());

    request.on_shipping_option_change(|id| println!("  -> shipping option changed to {id}"));
    request.on_shipping_address_change(|address| {
        println!(
            "  -> shipping address changed to {}",
            address.city.as_deref().unwrap_or("<unknown>")
        )
    });

    request.show()?;
    request.update_shipping_address(PaymentAddress {
        country: Some("DE".to_string()),
        city: Some("Berlin".to_string()),
        postal_code: Some("10115".to_string()),
        ..Default::default()
    })?;
    request.select_shipping_option("express")?;

    let response = request
        .settle(&AutoPresenter::accepting_with_details(
            json!({"last4": "4242"}),
        ))
        .await?;
    println!(
        "accepted via {}: {}",
        response.method_name,
        serde_json::to_string(&response.details)?
    );
    registry.remove(request.id()).await;

    // A second request, this time hitting the "no matching method" path.
    let mut request = PaymentRequest::new(&method_data, Some(&details), Some(&options))?;
    match request
        .show_and_settle(&AutoPresenter::failing("no-match"))
        .await
    {
        Err(PaymentRequestError::PaymentFailed(reason)) => {
            println!("payment failed as scripted: {reason}")
        }
        other => anyhow::bail!("unexpected outcome: {other:?}"),
    }

    Ok(())
}
