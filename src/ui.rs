use crate::models::StreaksResponse;

pub fn render_index(date: &str, streaks: &StreaksResponse) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{CURRENT_STREAK}}", &streaks.current_streak.to_string())
        .replace("{{LONGEST_STREAK}}", &streaks.longest_streak.to_string())
        .replace("{{TOTAL_WORDS}}", &streaks.total_words.to_string())
        .replace("{{WRITING_DAYS}}", &streaks.writing_days.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Writing Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f4f1ea;
      --bg-2: #cfe0d8;
      --ink: #27302c;
      --accent: #3c7a5e;
      --accent-2: #314b5f;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(49, 75, 95, 0.16);
      --cell-0: #e8e6df;
      --cell-1: #bcd9c8;
      --cell-2: #83bd9d;
      --cell-3: #4e9a74;
      --cell-4: #2d6b4d;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e7efe8 60%, #f2f0e8 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.3rem;
    }

    .subtitle {
      margin: 0;
      color: #5d665f;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(49, 75, 95, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #85907f;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.streak {
      color: var(--accent);
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(49, 75, 95, 0.08);
    }

    .heatmap {
      display: grid;
      grid-auto-flow: column;
      grid-template-rows: repeat(7, 13px);
      gap: 3px;
      overflow-x: auto;
      padding-bottom: 6px;
    }

    .heatmap .cell {
      width: 13px;
      height: 13px;
      border-radius: 3px;
      background: var(--cell-0);
    }

    .heatmap .level-1 { background: var(--cell-1); }
    .heatmap .level-2 { background: var(--cell-2); }
    .heatmap .level-3 { background: var(--cell-3); }
    .heatmap .level-4 { background: var(--cell-4); }

    form {
      display: grid;
      gap: 14px;
    }

    label {
      font-size: 0.9rem;
      font-weight: 600;
      color: #4a544d;
      display: grid;
      gap: 6px;
    }

    input,
    textarea {
      font: inherit;
      border: 1px solid rgba(49, 75, 95, 0.2);
      border-radius: 12px;
      padding: 10px 12px;
      width: 100%;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(60, 122, 94, 0.3);
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .columns {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 20px;
    }

    .history {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 4px;
      max-height: 360px;
      overflow-y: auto;
    }

    .history li {
      padding: 12px 8px;
      border-bottom: 1px solid rgba(49, 75, 95, 0.08);
    }

    .history .words {
      font-weight: 600;
      color: var(--accent-2);
    }

    .history .when {
      font-size: 0.85rem;
      color: #7b847c;
    }

    .history .note {
      margin-top: 4px;
      font-size: 0.9rem;
      color: #57605a;
    }

    .status {
      font-size: 0.95rem;
      color: #636c63;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f7a70;
      font-size: 0.9rem;
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

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Writing Tracker</h1>
      <p class="subtitle">Log each day's words and keep the chain going. Today is {{DATE}}.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Current streak</span>
        <span id="current-streak" class="value streak">{{CURRENT_STREAK}}</span>
      </div>
      <div class="stat">
        <span class="label">Longest streak</span>
        <span id="longest-streak" class="value streak">{{LONGEST_STREAK}}</span>
      </div>
      <div class="stat">
        <span class="label">Total words</span>
        <span id="total-words" class="value">{{TOTAL_WORDS}}</span>
      </div>
      <div class="stat">
        <span class="label">Writing days</span>
        <span id="writing-days" class="value">{{WRITING_DAYS}}</span>
      </div>
    </section>

    <section class="card">
      <h2>Last 12 months</h2>
      <div id="heatmap" class="heatmap"></div>
      <p class="hint">Each cell is one day; darker means more words.</p>
    </section>

    <div class="columns">
      <section class="card">
        <h2>Log today's progress</h2>
        <form id="log-form">
          <label>
            Word count
            <input id="word-count" type="number" min="0" step="1" required />
          </label>
          <label>
            Description
            <textarea id="description" rows="3" placeholder="What did you work on?"></textarea>
          </label>
          <button type="submit">Log words</button>
        </form>
      </section>

      <section class="card">
        <h2>Writing history</h2>
        <ul id="history" class="history"></ul>
      </section>
    </div>

    <div class="status" id="status"></div>
  </main>

  <script>
    const currentStreakEl = document.getElementById('current-streak');
    const longestStreakEl = document.getElementById('longest-streak');
    const totalWordsEl = document.getElementById('total-words');
    const writingDaysEl = document.getElementById('writing-days');
    const heatmapEl = document.getElementById('heatmap');
    const historyEl = document.getElementById('history');
    const statusEl = document.getElementById('status');
    const form = document.getElementById('log-form');
    const wordCountEl = document.getElementById('word-count');
    const descriptionEl = document.getElementById('description');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const todayLocalDate = () => {
      const now = new Date();
      const pad = (value) => String(value).padStart(2, '0');
      return `${now.getFullYear()}-${pad(now.getMonth() + 1)}-${pad(now.getDate())}`;
    };

    const bucket = (count) => {
      if (count === 0) return 'level-0';
      if (count < 500) return 'level-1';
      if (count < 1000) return 'level-2';
      if (count < 2000) return 'level-3';
      return 'level-4';
    };

    const renderHeatmap = (cells) => {
      heatmapEl.innerHTML = '';
      cells.forEach((cell) => {
        const div = document.createElement('div');
        div.className = `cell ${bucket(cell.count)}`;
        div.title = cell.count === 0
          ? `No writing on ${cell.date}`
          : `${cell.count} words on ${cell.date}`;
        heatmapEl.appendChild(div);
      });
    };

    const renderStreaks = (data) => {
      currentStreakEl.textContent = data.current_streak;
      longestStreakEl.textContent = data.longest_streak;
      totalWordsEl.textContent = data.total_words.toLocaleString();
      writingDaysEl.textContent = data.writing_days;
      renderHeatmap(data.heatmap);
    };

    const formatDate = (dateString) => {
      return new Date(`${dateString}T00:00:00`).toLocaleDateString(undefined, {
        weekday: 'short',
        year: 'numeric',
        month: 'short',
        day: 'numeric'
      });
    };

    const renderHistory = (entries) => {
      historyEl.innerHTML = '';
      entries.forEach((entry) => {
        const item = document.createElement('li');
        const words = document.createElement('div');
        words.className = 'words';
        words.textContent = `${entry.word_count.toLocaleString()} words`;
        const when = document.createElement('div');
        when.className = 'when';
        when.textContent = formatDate(entry.date);
        item.appendChild(words);
        item.appendChild(when);
        if (entry.description) {
          const note = document.createElement('div');
          note.className = 'note';
          note.textContent = entry.description;
          item.appendChild(note);
        }
        historyEl.appendChild(item);
      });
    };

    const loadStreaks = async () => {
      const res = await fetch('/api/streaks');
      if (!res.ok) {
        throw new Error('Unable to load streaks');
      }
      renderStreaks(await res.json());
    };

    const loadHistory = async () => {
      const res = await fetch('/api/word-entries');
      if (!res.ok) {
        throw new Error('Unable to load writing history');
      }
      renderHistory(await res.json());
    };

    const refresh = async () => {
      await Promise.all([loadStreaks(), loadHistory()]);
    };

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      const submit = async () => {
        setStatus('Saving...', 'info');
        const res = await fetch('/api/word-entries', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({
            word_count: parseInt(wordCountEl.value, 10),
            date: todayLocalDate(),
            description: descriptionEl.value || null
          })
        });

        if (!res.ok) {
          const msg = await res.text();
          throw new Error(msg || 'Request failed');
        }

        wordCountEl.value = '';
        descriptionEl.value = '';
        await refresh();
        setStatus('Saved', 'ok');
        setTimeout(() => setStatus('', ''), 1200);
      };
      submit().catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
