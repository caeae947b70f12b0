//! Global CSS styles for Reception Intake.
//!
//! Dark terminal palette: moss for progress, gold for headings.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* VOID (Backgrounds) */
  --void-black: #0a0a0a;
  --void-lighter: #0a0e0f;
  --void-border: #1a1a1a;

  /* MOSS GREEN (Completed) */
  --moss: #5a7a5a;
  --moss-glow: #7cb87c;

  /* GOLD (Headings, Active) */
  --gold: #d4af37;
  --gold-glow: rgba(212, 175, 55, 0.3);

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-mono);
  background: var(--void-black);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

/* === Layout === */
.reception {
  max-width: 36rem;
  margin: 0 auto;
  padding: 1rem;
}

/* === Typography === */
.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 600;
  color: var(--gold);
  margin-bottom: 1rem;
}

.section-header {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  font-weight: 600;
  color: var(--gold);
  margin-bottom: 0.5rem;
}

.body-text {
  font-size: var(--text-base);
  color: var(--text-primary);
}

/* === Cards === */
.card {
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-radius: 4px;
  padding: 1rem;
  margin-bottom: 0.75rem;
}

.question-text,
.prompt-title {
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.prompt-text {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.prompt-card {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.prompt-card.completed .prompt-text {
  color: var(--moss-glow);
}

/* === Summary === */
.summary-list {
  list-style: none;
  margin-bottom: 1rem;
}

/* === Status Bar === */
.status-bar {
  display: flex;
  gap: 0.25rem;
  margin: 1rem 0;
}

.status-cell {
  width: 2rem;
  height: 0.75rem;
  border-radius: 2px;
}

.status-cell.completed { background: var(--moss-glow); }
.status-cell.active { background: var(--gold); box-shadow: 0 0 8px var(--gold-glow); }
.status-cell.pending { background: var(--text-muted); }

/* === Buttons === */
.btn-primary,
.btn-option,
.btn-ghost {
  padding: 0.5rem 1.25rem;
  background: transparent;
  border: 1px solid var(--moss);
  border-radius: 4px;
  color: var(--text-primary);
  font-family: var(--font-mono);
  font-size: var(--text-base);
  cursor: pointer;
  transition: all 0.3s ease;
}

.btn-primary:hover:not(:disabled),
.btn-option:hover {
  border-color: var(--moss-glow);
  box-shadow: 0 0 20px rgba(124, 184, 124, 0.3);
}

.btn-primary:disabled {
  opacity: 0.4;
  cursor: default;
}

.btn-option {
  display: block;
  width: 100%;
  text-align: left;
  margin-bottom: 0.25rem;
}

.btn-ghost {
  border-color: var(--void-border);
  color: var(--text-secondary);
}

.epilogue {
  margin-top: 1rem;
}

.epilogue .export {
  margin-top: 0.5rem;
}
"#;
