use super::entry::TemplateEntry;

const SAAS_LANDING: &str = r##"<!DOCTYPE html><html lang="en"><head><meta charset="UTF-8"/><meta name="viewport" content="width=device-width, initial-scale=1.0"/><title>SaaS Landing</title><style>body{font-family:Inter,system-ui,Arial;margin:0;background:#0b1220;color:#e6eefc}.wrap{max-width:1040px;margin:56px auto;padding:0 16px}.cta{background:#2563eb;color:#fff;border:none;border-radius:12px;padding:12px 18px}</style></head><body><div class="wrap"><h1 style="font-size:54px;line-height:1.05;margin:0 0 8px">Launch faster with Bolt Lovable</h1><p style="opacity:.9;max-width:60ch">Beautiful templates, multi-AI orchestration, and one‑click deploy to Vercel or Netlify.</p><div style="margin-top:16px"><button class="cta">Get Started</button></div></div></body></html>"##;

const MODERN_PORTFOLIO: &str = r##"<!doctype html><html><head><meta charset="utf-8"/><meta name="viewport" content="width=device-width, initial-scale=1"/><title>Portfolio</title><style>body{font-family:Inter,system-ui;margin:0;background:#f8fafc;color:#0b1220}.grid{display:grid;grid-template-columns:repeat(3,1fr);gap:12px}</style></head><body><main style="max-width:980px;margin:56px auto;padding:0 16px"><h1 style="font-size:42px;margin:0 0 8px">Hi, I’m Alex</h1><p>Designer & developer crafting delightful products.</p><div class="grid"><div style="background:#e2e8f0;height:120px;border-radius:12px"></div><div style="background:#e2e8f0;height:120px;border-radius:12px"></div><div style="background:#e2e8f0;height:120px;border-radius:12px"></div></div></main></body></html>"##;

const MINIMAL_ECOMMERCE: &str = r##"<!doctype html><html><head><meta charset="utf-8"/><meta name="viewport" content="width=device-width, initial-scale=1"/><title>Store</title><style>body{font-family:Inter,system-ui;margin:0;background:#ffffff;color:#0b1220}.grid{display:grid;grid-template-columns:repeat(4,1fr);gap:16px}</style></head><body><main style="max-width:1100px;margin:56px auto;padding:0 16px"><header style="display:flex;justify-content:space-between;align-items:center;margin-bottom:16px"><strong>Shop</strong><button style="border-radius:12px;border:1px solid #d1d5db;padding:8px 12px">Cart (0)</button></header><div class="grid"><div style="background:#f3f4f6;height:160px;border-radius:12px"></div><div style="background:#f3f4f6;height:160px;border-radius:12px"></div><div style="background:#f3f4f6;height:160px;border-radius:12px"></div><div style="background:#f3f4f6;height:160px;border-radius:12px"></div></div></main></body></html>"##;

/// The templates shipped with the editor, in display order.
pub fn builtin_templates() -> Vec<TemplateEntry> {
    vec![
        TemplateEntry::new(
            "saas-landing",
            "SaaS Landing",
            "Software",
            &["Hero", "Pricing", "Testimonials"],
            4.8,
            SAAS_LANDING,
        ),
        TemplateEntry::new(
            "portfolio-modern",
            "Modern Portfolio",
            "Creative",
            &["Gallery", "About", "Contact"],
            4.6,
            MODERN_PORTFOLIO,
        ),
        TemplateEntry::new(
            "ecommerce-minimal",
            "Minimal eCommerce",
            "Retail",
            &["Grid", "Cart", "Checkout"],
            4.7,
            MINIMAL_ECOMMERCE,
        ),
    ]
}
