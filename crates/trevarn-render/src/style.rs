//! Inline stylesheet for the index page.

/// Palette, layout and responsive rules for the landing page.
pub const INDEX_CSS: &str = r##":root {
    --aour-glaz: #4A6FA5;
    --aour-balan: #D8A23A;
    --lin-violet: #5B6B9D;
    --ink: #11181C;
    --slate: #1F3A4A;
    --mist: #8A9094;
    --cloud: #E5E7EB;
    --pearl: #F8F9FA;
    --white: #FFFFFF;
}
* { margin:0; padding:0; box-sizing:border-box; }
body {
    font-family:'Inter',-apple-system,BlinkMacSystemFont,sans-serif;
    background: var(--ink); color: var(--white); line-height:1.6;
    min-height:100vh;
}

/* Navbar */
.nav-bar {
    position: absolute; top: 0; left: 0; right: 0; z-index: 100;
    padding: 20px 60px;
    display: flex; align-items: center; justify-content: space-between;
}
.nav-logo { display: inline-flex; align-items: center; text-decoration: none; }
.nav-logo:hover { opacity: 0.7; }
.nav-right { display: flex; align-items: center; gap: 12px; }
.pdf-download {
    display: inline-flex; align-items: center; justify-content: center;
    width: 28px; height: 28px; border-radius: 4px;
    border: 1px solid rgba(255,255,255,0.2);
    color: var(--mist); text-decoration: none;
    transition: all 0.15s ease;
}
.pdf-download:hover {
    color: var(--white); border-color: rgba(255,255,255,0.4);
}
.pdf-download svg { width: 14px; height: 14px; }
.lang-switch {
    font-size: 12px; font-weight: 600; letter-spacing: 0.08em;
    color: var(--mist); text-decoration: none;
    padding: 6px 12px; border: 1px solid rgba(255,255,255,0.2);
    border-radius: 4px; transition: all 0.15s ease;
}
.lang-switch:hover {
    color: var(--white); border-color: rgba(255,255,255,0.4);
}

/* Hero */
.hero {
    padding: 120px 60px 100px;
    background: linear-gradient(180deg, var(--ink) 0%, #1a2a3a 100%);
    position: relative;
    overflow: hidden;
}
.hero::before {
    content: '';
    position: absolute;
    top: 0; left: 0; right: 0; bottom: 0;
    background: url("data:image/svg+xml,%3Csvg viewBox='0 0 400 400' xmlns='http://www.w3.org/2000/svg'%3E%3Cpolygon points='50,380 60,180 100,160 110,380' fill='%234A6FA5' opacity='0.03'/%3E%3Cpolygon points='140,380 170,80 200,90 230,380' fill='%234A6FA5' opacity='0.03'/%3E%3Cpolygon points='260,380 300,40 360,30 390,380' fill='%234A6FA5' opacity='0.03'/%3E%3C/svg%3E") no-repeat center;
    background-size: 600px;
    opacity: 0.5;
}
.hero-inner {
    max-width: 1000px;
    margin: 0 auto;
    position: relative;
    z-index: 1;
}
.hero-label {
    font-size: 11px;
    font-weight: 600;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: var(--aour-glaz);
    margin-bottom: 40px;
}
.hero-lockup {
    margin-bottom: 48px;
}
.hero-statement {
    font-family: 'IBM Plex Sans', sans-serif;
    font-size: 32px;
    font-weight: 300;
    line-height: 1.4;
    color: var(--white);
    max-width: 600px;
    margin-bottom: 24px;
}
.hero-statement strong {
    font-weight: 600;
    color: var(--aour-balan);
}
.hero-sub {
    font-size: 15px;
    color: var(--mist);
    max-width: 500px;
    line-height: 1.7;
}

/* Main content */
.main {
    background: var(--pearl);
    padding: 80px 60px 100px;
}
.main-inner {
    max-width: 1000px;
    margin: 0 auto;
}
.section-header {
    display: flex;
    justify-content: space-between;
    align-items: baseline;
    margin-bottom: 40px;
    padding-bottom: 20px;
    border-bottom: 1px solid var(--cloud);
}
.section-title {
    font-size: 11px;
    font-weight: 600;
    letter-spacing: 0.14em;
    text-transform: uppercase;
    color: var(--mist);
}
.section-count {
    font-size: 12px;
    color: var(--cloud);
}

/* Cards grid */
.cards {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 20px;
}
.card {
    background: var(--white);
    border-radius: 12px;
    padding: 32px;
    text-decoration: none;
    color: inherit;
    display: grid;
    grid-template-columns: 48px 1fr 24px;
    gap: 20px;
    align-items: start;
    border: 1px solid transparent;
    transition: all 0.2s ease;
}
.card:hover {
    border-color: var(--aour-glaz);
    box-shadow: 0 8px 32px rgba(74, 111, 165, 0.12);
    transform: translateY(-2px);
}
.card-icon {
    width: 48px;
    height: 48px;
    background: var(--pearl);
    border-radius: 8px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-family: 'IBM Plex Sans', sans-serif;
    font-size: 20px;
    font-weight: 600;
    color: var(--aour-glaz);
}
.card-content {
    min-width: 0;
}
.card-num {
    font-size: 11px;
    font-weight: 600;
    color: var(--cloud);
    margin-bottom: 8px;
    font-family: 'JetBrains Mono', monospace;
}
.card-content h3 {
    font-family: 'IBM Plex Sans', sans-serif;
    font-size: 20px;
    font-weight: 600;
    color: var(--slate);
    margin-bottom: 8px;
}
.card-content p {
    font-size: 13px;
    color: var(--mist);
    line-height: 1.6;
}
.card-arrow {
    color: var(--cloud);
    transition: all 0.2s ease;
    margin-top: 4px;
}
.card:hover .card-arrow {
    color: var(--aour-glaz);
    transform: translateX(4px);
}

/* Footer */
.footer {
    background: var(--ink);
    padding: 60px;
    text-align: center;
}
.footer-mark {
    opacity: 0.2;
    margin-bottom: 24px;
}
.footer-text {
    font-size: 12px;
    color: var(--mist);
    letter-spacing: 0.05em;
}
.footer-text a {
    color: var(--aour-glaz);
    text-decoration: none;
}
.footer-text a:hover {
    text-decoration: underline;
}

/* Responsive */
@media (max-width: 768px) {
    .nav-bar { padding: 16px 24px; }
    .hero { padding: 100px 24px 80px; }
    .hero-statement { font-size: 26px; }
    .main { padding: 60px 24px 80px; }
    .cards { grid-template-columns: 1fr; }
    .card { padding: 24px; }
    .card-content h3 { font-size: 18px; }
}
@media (max-width: 480px) {
    .hero { padding: 88px 20px 60px; }
    .hero-lockup svg { width: 100%; max-width: 300px; }
    .hero-statement { font-size: 22px; }
    .main { padding: 48px 20px 60px; }
    .card { grid-template-columns: 40px 1fr 20px; gap: 16px; padding: 20px; }
    .card-icon { width: 40px; height: 40px; font-size: 16px; }
}
"##;
