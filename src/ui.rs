use crate::heatmap::{iso_date, Heatmap, HeatmapLayout};

pub fn render_journal(heatmap: &Heatmap, layout: &HeatmapLayout) -> String {
    let total: u64 = heatmap.cells().map(|cell| u64::from(cell.count)).sum();
    let active_days = heatmap.cells().filter(|cell| cell.count > 0).count();

    INDEX_HTML
        .replace("{{CELL}}", &layout.cell_size.to_string())
        .replace("{{GAP}}", &layout.gap.to_string())
        .replace("{{MONTH_GAP}}", &layout.month_gap.to_string())
        .replace("{{TODAY}}", &iso_date(heatmap.today))
        .replace("{{TOTAL}}", &total.to_string())
        .replace("{{ACTIVE_DAYS}}", &active_days.to_string())
        .replace("{{LABELS}}", &render_labels(heatmap, layout))
        .replace("{{GRID}}", &render_grid(heatmap))
}

fn render_labels(heatmap: &Heatmap, layout: &HeatmapLayout) -> String {
    let mut out = String::new();
    for block in &heatmap.blocks {
        out.push_str(&format!(
            r#"<div class="month-label" style="width: {}px">{}</div>"#,
            block.header_width(layout.cell_size, layout.gap),
            block.label
        ));
    }
    out
}

fn render_grid(heatmap: &Heatmap) -> String {
    let mut out = String::new();
    for block in &heatmap.blocks {
        out.push_str(&format!(
            r#"<div class="month" data-month="{}-{:02}">"#,
            block.year,
            block.month + 1
        ));
        for week in &block.weeks {
            out.push_str(r#"<div class="week">"#);
            for slot in week {
                match slot {
                    Some(date) => {
                        let cell = heatmap.cell(*date);
                        out.push_str(&format!(
                            r#"<div class="cell level-{}" data-date="{}" data-count="{}"><span class="tip"><strong>{}</strong>{}</span></div>"#,
                            cell.tier.level(),
                            iso_date(cell.date),
                            cell.count,
                            cell.date_label(),
                            cell.count_label()
                        ));
                    }
                    None => out.push_str(r#"<div class="cell blank"></div>"#),
                }
            }
            out.push_str("</div>");
        }
        out.push_str("</div>");
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Activity Log</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #0f1117;
      --bg-2: #1b2233;
      --ink: #e8e6e3;
      --muted: #8f96a3;
      --primary: 255, 107, 74;
      --card: rgba(255, 255, 255, 0.04);
      --border: rgba(255, 255, 255, 0.1);
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.35);
      --cell: {{CELL}}px;
      --gap: {{GAP}}px;
      --month-gap: {{MONTH_GAP}}px;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(180deg, var(--bg-1), #151a26 60%, var(--bg-1) 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 48px 18px;
    }

    .journal {
      width: min(1100px, 100%);
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      text-align: center;
      display: grid;
      gap: 10px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2.2rem, 5vw, 3.4rem);
      margin: 0;
    }

    h1 span {
      color: rgb(var(--primary));
    }

    .subtitle {
      margin: 0 auto;
      max-width: 640px;
      color: var(--muted);
    }

    .card {
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 28px;
      display: grid;
      gap: 18px;
    }

    .card h2 {
      margin: 0;
      text-align: center;
      color: rgb(var(--primary));
    }

    .summary {
      display: flex;
      justify-content: center;
      gap: 28px;
      color: var(--muted);
      font-size: 0.95rem;
    }

    .summary strong {
      color: var(--ink);
    }

    .scroll {
      overflow-x: auto;
      border: 1px solid var(--border);
      border-radius: 18px;
      padding: 20px;
    }

    .heatmap {
      width: max-content;
      margin: 0 auto;
    }

    .labels,
    .grid {
      display: flex;
      gap: var(--month-gap);
    }

    .labels {
      margin-bottom: 10px;
    }

    .month-label {
      font-size: 0.75rem;
      color: var(--muted);
      text-align: center;
    }

    .month,
    .week {
      display: flex;
      gap: var(--gap);
    }

    .week {
      flex-direction: column;
    }

    .cell {
      position: relative;
      width: var(--cell);
      height: var(--cell);
      border-radius: 3px;
      border: 1px solid rgba(255, 255, 255, 0.15);
      transition: transform 150ms ease;
    }

    .cell.blank {
      border: none;
      background: transparent;
    }

    .cell:not(.blank):hover {
      transform: scale(1.25);
      border-color: rgba(var(--primary), 0.5);
      cursor: pointer;
    }

    .level-0 { background: rgba(15, 17, 23, 0.5); }
    .level-1 { background: rgba(var(--primary), 0.25); }
    .level-2 { background: rgba(var(--primary), 0.45); }
    .level-3 { background: rgba(var(--primary), 0.65); }
    .level-4 { background: rgb(var(--primary)); }

    .tip {
      display: none;
      position: absolute;
      bottom: calc(100% + 8px);
      left: 50%;
      transform: translateX(-50%);
      white-space: nowrap;
      background: rgba(15, 17, 23, 0.92);
      border: 1px solid var(--border);
      border-radius: 8px;
      padding: 6px 8px;
      font-size: 0.75rem;
      color: var(--muted);
      z-index: 10;
      pointer-events: none;
    }

    .tip strong {
      display: block;
      color: var(--ink);
    }

    .cell:hover .tip {
      display: block;
    }

    .hint {
      margin: 0;
      text-align: center;
      color: var(--muted);
      font-size: 0.8rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }
  </style>
</head>
<body>
  <main class="journal">
    <header>
      <h1>Daily <span>Activity Log</span></h1>
      <p class="subtitle">A running log of daily engineering work: problem solving, project development and technical execution across platforms.</p>
    </header>
    <section class="card">
      <h2>Journal Entry</h2>
      <div class="summary">
        <span>Through <strong>{{TODAY}}</strong></span>
        <span><strong>{{TOTAL}}</strong> activities</span>
        <span><strong>{{ACTIVE_DAYS}}</strong> active days</span>
      </div>
      <div class="scroll">
        <div class="heatmap">
          <div class="labels">{{LABELS}}</div>
          <div class="grid">{{GRID}}</div>
        </div>
      </div>
      <p class="hint">Hover a square to see the date and activity count.</p>
    </section>
  </main>
</body>
</html>
"#;
