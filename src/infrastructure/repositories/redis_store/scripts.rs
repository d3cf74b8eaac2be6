// src/infrastructure/repositories/redis_store/scripts.rs
//! Lua scripts that make each check-then-write on a cook document atomic.
//! Index keys (`cook:email:*`, `cook:name:*`, `cook:external:*`) hold the id
//! of the owning cook.

/// KEYS: document, email index, name index, external index.
/// ARGV: document json, cook id, "1" when the external index must be claimed.
pub(super) const INSERT_COOK: &str = r#"
    if redis.call('EXISTS', KEYS[2]) == 1 then
        return 'email'
    end
    if redis.call('EXISTS', KEYS[3]) == 1 then
        return 'name'
    end
    if ARGV[3] == '1' and redis.call('EXISTS', KEYS[4]) == 1 then
        return 'external'
    end
    redis.call('SET', KEYS[1], ARGV[1])
    redis.call('SET', KEYS[2], ARGV[2])
    redis.call('SET', KEYS[3], ARGV[2])
    if ARGV[3] == '1' then
        redis.call('SET', KEYS[4], ARGV[2])
    end
    return 'ok'
"#;

/// KEYS: document, new email index, new name index.
/// ARGV: cook id, new name or '', new email or '', new avatar or '', key prefix.
/// Returns `{status}` or `{'ok', document}`.
pub(super) const UPDATE_COOK: &str = r#"
    local raw = redis.call('GET', KEYS[1])
    if not raw then
        return {'missing'}
    end
    local doc = cjson.decode(raw)
    local rename = ARGV[2] ~= '' and ARGV[2] ~= doc.name
    local reemail = ARGV[3] ~= '' and ARGV[3] ~= doc.email
    if reemail then
        local owner = redis.call('GET', KEYS[2])
        if owner and owner ~= ARGV[1] then
            return {'email'}
        end
    end
    if rename then
        local owner = redis.call('GET', KEYS[3])
        if owner and owner ~= ARGV[1] then
            return {'name'}
        end
    end
    if rename then
        redis.call('DEL', ARGV[5] .. 'cook:name:' .. doc.name)
        redis.call('SET', KEYS[3], ARGV[1])
        doc.name = ARGV[2]
    end
    if reemail then
        redis.call('DEL', ARGV[5] .. 'cook:email:' .. doc.email)
        redis.call('SET', KEYS[2], ARGV[1])
        doc.email = ARGV[3]
    end
    if ARGV[4] ~= '' then
        doc.avatar = ARGV[4]
    end
    local encoded = cjson.encode(doc)
    redis.call('SET', KEYS[1], encoded)
    return {'ok', encoded}
"#;

/// KEYS: document, external index. ARGV: cook id, marker, key prefix.
/// Returns `{status}` or `{'ok', document}`.
pub(super) const LINK_EXTERNAL: &str = r#"
    local raw = redis.call('GET', KEYS[1])
    if not raw then
        return {'missing'}
    end
    local owner = redis.call('GET', KEYS[2])
    if owner and owner ~= ARGV[1] then
        return {'external'}
    end
    local doc = cjson.decode(raw)
    local previous = doc.external_subject
    if type(previous) == 'string' and previous ~= ARGV[2] then
        redis.call('DEL', ARGV[3] .. 'cook:external:' .. previous)
    end
    doc.external_subject = ARGV[2]
    redis.call('SET', KEYS[2], ARGV[1])
    local encoded = cjson.encode(doc)
    redis.call('SET', KEYS[1], encoded)
    return {'ok', encoded}
"#;

/// KEYS: document. ARGV: menu id, favorite entry json.
/// Returns -1 when the document is missing, 0 when already present, 1 when added.
pub(super) const ADD_FAVORITE: &str = r#"
    local raw = redis.call('GET', KEYS[1])
    if not raw then
        return -1
    end
    local doc = cjson.decode(raw)
    local favorites = doc.favorites
    if type(favorites) ~= 'table' then
        favorites = {}
    end
    for _, entry in ipairs(favorites) do
        if entry.menu_id == ARGV[1] then
            return 0
        end
    end
    table.insert(favorites, cjson.decode(ARGV[2]))
    doc.favorites = favorites
    redis.call('SET', KEYS[1], cjson.encode(doc))
    return 1
"#;

/// KEYS: document. ARGV: menu id.
/// Returns -1 when the document is missing, 0 when absent, 1 when removed.
pub(super) const REMOVE_FAVORITE: &str = r#"
    local raw = redis.call('GET', KEYS[1])
    if not raw then
        return -1
    end
    local doc = cjson.decode(raw)
    local kept = {}
    local removed = 0
    if type(doc.favorites) == 'table' then
        for _, entry in ipairs(doc.favorites) do
            if entry.menu_id == ARGV[1] then
                removed = 1
            else
                table.insert(kept, entry)
            end
        end
    end
    if removed == 0 then
        return 0
    end
    doc.favorites = kept
    redis.call('SET', KEYS[1], cjson.encode(doc))
    return 1
"#;
