//! Global CSS styles for the contact section.
//!
//! Neon-on-dark palette; particle `float` keyframes and the fade-in
//! entrance animations live here too.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg-dark: #0a0a14;
  --bg-card: rgba(20, 20, 35, 0.75);
  --border: rgba(255, 255, 255, 0.08);

  /* Neon accents (also the particle palette) */
  --neon-cyan: #00f5ff;
  --neon-purple: #b14aed;
  --neon-green: #39ff14;
  --neon-cyan-glow: rgba(0, 245, 255, 0.35);
  --neon-purple-glow: rgba(177, 74, 237, 0.35);

  /* Text */
  --text-primary: #f5f5f7;
  --text-secondary: rgba(245, 245, 247, 0.7);
  --text-muted: rgba(245, 245, 247, 0.45);

  /* Semantic */
  --danger: #ff3366;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--bg-dark);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

.config-error {
  padding: 2rem;
  color: var(--danger);
  font-family: var(--font-mono);
}

/* === Layout === */
.section {
  padding: 5rem 0;
}

.container {
  position: relative;
  z-index: 1;
  width: 100%;
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.section-title {
  font-size: 2.5rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: 3rem;
  background: linear-gradient(90deg, var(--neon-cyan), var(--neon-purple));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

/* === Contact Section === */
.contact {
  position: relative;
  overflow: hidden;
  min-height: 100vh;
}

.contact-container {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 3rem;
}

@media (max-width: 900px) {
  .contact-container {
    grid-template-columns: 1fr;
  }
}

/* === Particles === */
.particles-container {
  position: absolute;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
  z-index: 0;
}

.particle {
  position: absolute;
  border-radius: 50%;
  opacity: 0.6;
  box-shadow: 0 0 6px currentColor;
}

@keyframes float {
  0% {
    transform: translate(0, 0);
    opacity: 0;
  }
  10% {
    opacity: 0.6;
  }
  50% {
    transform: translate(30px, -60px);
  }
  90% {
    opacity: 0.6;
  }
  100% {
    transform: translate(0, -120px);
    opacity: 0;
  }
}

/* === Contact Info === */
.contact-info {
  padding: 2rem;
  background: var(--bg-card);
  border: 1px solid var(--border);
  border-radius: 16px;
  backdrop-filter: blur(8px);
}

.contact-info h3 {
  font-size: 1.5rem;
  margin-bottom: 1rem;
  color: var(--neon-cyan);
}

.contact-info p {
  color: var(--text-secondary);
  margin-bottom: 2rem;
}

.contact-links {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.contact-link {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  color: var(--text-primary);
  text-decoration: none;
  transition: color var(--transition-fast), transform var(--transition-fast);
}

a.contact-link:hover {
  color: var(--neon-cyan);
  transform: translateX(4px);
}

.contact-icon {
  display: inline-flex;
  width: 20px;
  justify-content: center;
  color: var(--neon-purple);
}

.map {
  width: 100%;
  height: 260px;
  margin-top: 1rem;
  border: 0;
  border-radius: 12px;
  filter: invert(90%) hue-rotate(180deg);
}

/* === Contact Form === */
.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  padding: 2rem;
  background: var(--bg-card);
  border: 1px solid var(--border);
  border-radius: 16px;
  backdrop-filter: blur(8px);
}

.form-group {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.form-group label {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.form-group input,
.form-group textarea {
  width: 100%;
  padding: 0.75rem 1rem;
  font-family: inherit;
  font-size: 1rem;
  color: var(--text-primary);
  background: rgba(255, 255, 255, 0.04);
  border: 1px solid var(--border);
  border-radius: 8px;
  outline: none;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.form-group textarea {
  resize: vertical;
}

.form-group input::placeholder,
.form-group textarea::placeholder {
  color: var(--text-muted);
}

.form-group input:focus,
.form-group textarea:focus {
  border-color: var(--neon-cyan);
  box-shadow: 0 0 0 3px var(--neon-cyan-glow);
}

/* === Buttons === */
.submit-button {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.875rem 1.5rem;
  font-family: inherit;
  font-size: 1rem;
  font-weight: 600;
  color: var(--bg-dark);
  background: linear-gradient(90deg, var(--neon-cyan), var(--neon-purple));
  border: none;
  border-radius: 8px;
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast), opacity var(--transition-fast);
}

.submit-button:hover:not(:disabled) {
  transform: translateY(-2px);
  box-shadow: 0 6px 20px var(--neon-purple-glow);
}

.submit-button:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.send-icon {
  font-size: 1.1rem;
}

/* === Status Messages === */
.success-message,
.error-message {
  padding: 0.875rem 1rem;
  border-radius: 8px;
  font-size: 0.9rem;
  animation: fadeIn var(--transition-normal);
}

.success-message {
  color: var(--neon-green);
  background: rgba(57, 255, 20, 0.08);
  border: 1px solid rgba(57, 255, 20, 0.3);
}

.error-message {
  color: var(--danger);
  background: rgba(255, 51, 102, 0.08);
  border: 1px solid rgba(255, 51, 102, 0.3);
}

/* === Entrance Animations === */
.fade-in-up {
  animation: fadeInUp 0.6s ease both;
}

.fade-in-left {
  animation: fadeInLeft 0.6s ease both;
}

.fade-in-right {
  animation: fadeInRight 0.6s ease 0.2s both;
}

@keyframes fadeIn {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes fadeInUp {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes fadeInLeft {
  from { opacity: 0; transform: translateX(-50px); }
  to { opacity: 1; transform: translateX(0); }
}

@keyframes fadeInRight {
  from { opacity: 0; transform: translateX(50px); }
  to { opacity: 1; transform: translateX(0); }
}
"#;
