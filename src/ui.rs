pub fn render_index(best_score: Option<u32>) -> String {
    let best = best_score.map_or_else(|| "--".to_string(), |score| score.to_string());
    INDEX_HTML.replace("{{BEST}}", &best)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Memory Match</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f1f0fb;
      --bg-2: #c9c3f5;
      --ink: #2b2a28;
      --accent: #7c5cff;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ece7ff 60%, #f7f5fd 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
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

    .subtitle {
      margin: 0;
      color: #5f5c57;
    }

    .choices {
      display: grid;
      gap: 14px;
    }

    .choice-row {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .choice {
      flex: 1;
      background: transparent;
      color: #6b645d;
    }

    .choice.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(124, 92, 255, 0.3);
    }

    .btn-secondary {
      background: var(--accent-2);
      color: white;
    }

    .stats {
      display: flex;
      justify-content: space-between;
      font-weight: 600;
      color: var(--accent-2);
    }

    .board {
      display: grid;
      gap: 10px;
    }

    .board.easy {
      grid-template-columns: repeat(3, 1fr);
    }

    .board.medium,
    .board.hard {
      grid-template-columns: repeat(4, 1fr);
    }

    .tile {
      aspect-ratio: 1;
      border-radius: 16px;
      font-size: clamp(1.6rem, 5vw, 2.4rem);
      background: #eceaf3;
      color: transparent;
    }

    .tile.up {
      background: linear-gradient(135deg, var(--accent), #a48bff);
      color: white;
    }

    .tile.matched {
      opacity: 0.75;
    }

    .controls {
      display: flex;
      justify-content: space-between;
      gap: 12px;
    }

    .banner {
      text-align: center;
      font-size: 1.2rem;
      font-weight: 600;
      color: var(--accent);
    }

    .best {
      color: #8b6a12;
      font-weight: 600;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.9rem;
      color: #8b857d;
    }

    .status[data-type="error"] {
      color: #c0392b;
    }

    [hidden] {
      display: none !important;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Memory Match</h1>
      <p class="subtitle">Flip two cards at a time and find every pair.</p>
      <p class="best">Best score: <span id="best">{{BEST}}</span></p>
    </header>

    <section id="menu" class="choices">
      <div class="choice-row" data-group="difficulty">
        <button class="choice active" data-value="easy">Easy</button>
        <button class="choice" data-value="medium">Medium</button>
        <button class="choice" data-value="hard">Hard</button>
      </div>
      <div class="choice-row" data-group="theme">
        <button class="choice active" data-value="nature">Nature</button>
        <button class="choice" data-value="food">Food</button>
        <button class="choice" data-value="travel">Travel</button>
      </div>
      <button id="start" class="btn-primary">Start Game</button>
    </section>

    <section id="play" hidden>
      <div class="stats">
        <span id="clock">00:00</span>
        <span>Moves: <span id="moves">0</span></span>
        <span>Pairs: <span id="pairs">0/0</span></span>
      </div>
      <div id="board" class="board"></div>
      <p id="banner" class="banner" hidden></p>
      <div class="controls">
        <button id="exit" class="btn-secondary">Exit Game</button>
        <button id="reset" class="btn-primary">Reset</button>
      </div>
    </section>

    <p id="status" class="status"></p>
  </main>

  <script>
    const menuEl = document.getElementById('menu');
    const playEl = document.getElementById('play');
    const boardEl = document.getElementById('board');
    const clockEl = document.getElementById('clock');
    const movesEl = document.getElementById('moves');
    const pairsEl = document.getElementById('pairs');
    const bannerEl = document.getElementById('banner');
    const bestEl = document.getElementById('best');
    const statusEl = document.getElementById('status');

    const selection = { difficulty: 'easy', theme: 'nature' };
    let poller = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const render = (game) => {
      bestEl.textContent = game.best_score ?? '--';
      const idle = game.status === 'idle';
      menuEl.hidden = !idle;
      playEl.hidden = idle;
      if (idle) {
        return;
      }

      clockEl.textContent = game.elapsed;
      movesEl.textContent = game.moves;
      pairsEl.textContent = `${game.matched_pairs}/${game.total_pairs}`;
      boardEl.className = `board ${game.difficulty}`;
      boardEl.innerHTML = game.cards
        .map((card) => {
          const up = card.flipped || card.matched;
          const classes = ['tile', up ? 'up' : '', card.matched ? 'matched' : ''].join(' ');
          return `<button class="${classes}" data-id="${card.id}">${up ? card.face : '?'}</button>`;
        })
        .join('');

      if (game.status === 'completed') {
        bannerEl.hidden = false;
        bannerEl.textContent = `Done in ${game.elapsed} with ${game.moves} moves. Score: ${game.score}`;
      } else {
        bannerEl.hidden = true;
      }
    };

    const call = async (method, path, body) => {
      const res = await fetch(path, {
        method,
        headers: body ? { 'content-type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      const game = await res.json();
      render(game);
      return game;
    };

    const refresh = () => call('GET', '/api/game').catch((err) => setStatus(err.message, 'error'));

    const startPolling = () => {
      if (!poller) {
        poller = setInterval(refresh, 250);
      }
    };

    const stopPolling = () => {
      clearInterval(poller);
      poller = null;
    };

    document.querySelectorAll('.choice-row').forEach((row) => {
      row.addEventListener('click', (event) => {
        const button = event.target.closest('.choice');
        if (!button) {
          return;
        }
        selection[row.dataset.group] = button.dataset.value;
        row.querySelectorAll('.choice').forEach((item) => item.classList.toggle('active', item === button));
      });
    });

    document.getElementById('start').addEventListener('click', () => {
      call('POST', '/api/game/start', selection)
        .then(startPolling)
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('reset').addEventListener('click', () => {
      call('POST', '/api/game/reset').catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('exit').addEventListener('click', () => {
      stopPolling();
      call('POST', '/api/game/exit').catch((err) => setStatus(err.message, 'error'));
    });

    boardEl.addEventListener('click', (event) => {
      const tile = event.target.closest('.tile');
      if (!tile) {
        return;
      }
      call('POST', '/api/game/click', { card_id: Number(tile.dataset.id) })
        .catch((err) => setStatus(err.message, 'error'));
    });

    refresh().then((game) => {
      if (game && game.status !== 'idle') {
        startPolling();
      }
    });
  </script>
</body>
</html>
"#;
