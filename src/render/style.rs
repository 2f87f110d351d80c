/// Page stylesheet, inlined into `<head>`
pub const CSS: &str = r#"
:root{
  --fg:#111; --muted:#555; --line:#e5e5e5; --bg:#fff; --link:#0a58ca; --max:740px;
}
*{box-sizing:border-box}
html{scroll-behavior:smooth}
body{margin:0;background:var(--bg);color:var(--fg);font-family:system-ui,-apple-system,"Segoe UI",sans-serif}
.wrap{max-width:var(--max);margin:0 auto;padding:24px}
header{border-bottom:1px solid var(--line);padding-bottom:14px;margin-bottom:24px}
header .top{display:flex;align-items:center;justify-content:space-between;gap:24px}
header h1{font-size:26px;line-height:1.15;margin:0}
nav{font-size:14px;color:var(--muted)}
nav a{color:var(--link);margin-right:12px;text-decoration:none}
nav a:last-child{margin-right:0}
nav a:hover{text-decoration:underline}
.intro{display:grid;grid-template-columns:1fr 160px;gap:18px;align-items:start;margin:18px 0 6px}
.intro p{margin:6px 0}
.intro a{color:var(--link);text-decoration:none}
.intro a:hover{text-decoration:underline}
.links{display:flex;flex-wrap:wrap;gap:10px;font-size:14px;margin-top:6px}
.links a{color:var(--link);text-decoration:none}
.links a::after{content:"·";margin:0 8px;color:var(--muted)}
.links a:last-child::after{content:""}
.links a:hover{text-decoration:underline}
.headshot{width:160px;height:160px;border-radius:10px;object-fit:cover;object-position:50% 25%;border:1px solid rgba(0,0,0,.08);display:block}
.headshot.fallback{display:flex;align-items:center;justify-content:center;background:#f2f2f2;color:#555;font-weight:600;letter-spacing:1px}
h2{font-size:18px;margin:16px 0 8px}
section{padding:6px 0}
.list{list-style:none;padding:0;margin:0}
.list li{padding:8px 0;border-top:1px solid var(--line)}
.list li:first-child{border-top:none}
.tags{font-size:12px;color:var(--muted)}
.para p{margin:6px 0 0}
.meta-links{margin-top:6px}
.meta-links a{margin-right:12px;font-size:14px;color:var(--link)}
footer{border-top:1px solid var(--line);margin-top:26px;padding:12px 0;color:var(--muted);font-size:14px}
.pub{display:grid;grid-template-columns:120px 1fr;gap:8px;align-items:start}
.proj{display:grid;grid-template-columns:120px 1fr;grid-template-rows:auto auto auto;grid-template-areas:
  "photo title"
  "photo desc"
  "photo links";
  gap:8px;align-items:start}
.grid-photo{grid-area:photo}
.proj-title{grid-area:title}
.proj-desc{grid-area:desc}
.proj-links{grid-area:links}
.thumb-wrap{width:120px;height:90px}
.proj-thumb{width:120px;height:90px;object-fit:contain;border:1px solid rgba(0,0,0,.08);border-radius:6px;display:block;background:#fff}
@media (max-width:720px){
  .intro{grid-template-columns:1fr 140px}
  .headshot{width:140px;height:140px}
}
"#;
